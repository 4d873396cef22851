//! Condition stylist
//!
//! Asks the language model for a short, friendly phrasing of a weather
//! condition plus a matching icon name, tuned to the part of the day.

use std::sync::Arc;

use domain::value_objects::TimeOfDay;
use domain::DomainError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::InferencePort;

const SYSTEM_PROMPT: &str = "You are a weather expert who provides concise and friendly \
weather descriptions and icon suggestions based on the current weather condition and \
time of day. Respond with a JSON object containing exactly two string fields: \
\"description\" and \"icon\".";

/// A friendly phrasing of a condition, produced by the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledCondition {
    /// Short, engaging description of the condition
    pub description: String,
    /// Icon name matching the condition and time of day
    pub icon: String,
}

/// Service that phrases conditions through the inference port
pub struct ConditionStylist {
    inference: Arc<dyn InferencePort>,
}

impl std::fmt::Debug for ConditionStylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionStylist")
            .field("inference", &"<InferencePort>")
            .finish()
    }
}

impl ConditionStylist {
    /// Create a new stylist
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Produce a friendly description and icon for a condition
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank condition, and an inference
    /// error when the model is unreachable or its output is not the expected
    /// JSON object.
    #[instrument(skip(self), fields(time_of_day = %time_of_day))]
    pub async fn stylize(
        &self,
        condition: &str,
        time_of_day: TimeOfDay,
    ) -> Result<StyledCondition, ApplicationError> {
        let condition = condition.trim();
        if condition.is_empty() {
            return Err(DomainError::ValidationError(
                "condition must not be empty".to_string(),
            )
            .into());
        }

        let user_prompt = format!(
            "Weather Condition: {condition}\nTime of Day: {time_of_day}\n\n\
             Provide a short, engaging description of the weather condition that is \
             appropriate for the time of day. Also suggest an icon to represent the \
             weather condition, appropriate for the time of day. Do not mention the \
             time of day in the description; the user already knows it."
        );

        let raw = self.inference.complete(SYSTEM_PROMPT, &user_prompt).await?;
        let styled = parse_styled(&raw)?;
        debug!(icon = %styled.icon, "Styled weather condition");
        Ok(styled)
    }

    /// Check if the inference backend is reachable
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }
}

/// Extract the JSON object from a model response
///
/// Models wrap JSON in code fences or prose often enough that the parser
/// accepts anything between the first `{` and the last `}`.
fn parse_styled(raw: &str) -> Result<StyledCondition, ApplicationError> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    let candidate = match (start, end) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => {
            warn!("Model response contained no JSON object");
            return Err(ApplicationError::Inference(
                "model response was not a JSON object".to_string(),
            ));
        }
    };

    serde_json::from_str(candidate)
        .map_err(|e| ApplicationError::Inference(format!("malformed model response: {e}")))
}
