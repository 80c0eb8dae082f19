//! Classify command implementation

use crate::cli::output::{format_classification_json, format_classification_text};
use crate::cli::ClassifyArgs;
use crate::intent::classify;

/// Handle `switchboard classify`
pub fn handle_classify(args: &ClassifyArgs) -> Result<String, Box<dyn std::error::Error>> {
    let classification = classify(&args.message);

    if args.json {
        Ok(format_classification_json(&classification)?)
    } else {
        Ok(format_classification_text(&classification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_text() {
        let args = ClassifyArgs {
            message: "İnternet çok yavaş".to_string(),
            json: false,
        };
        let output = handle_classify(&args).unwrap();
        assert!(output.contains("connectivity"));
        assert!(output.contains("Escalate: no"));
    }

    #[test]
    fn test_classify_json_complaint() {
        let args = ClassifyArgs {
            message: "I am very unhappy with this".to_string(),
            json: true,
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&handle_classify(&args).unwrap()).unwrap();
        assert_eq!(parsed["intent"], "complaint");
        assert_eq!(parsed["should_escalate"], true);
        assert_eq!(parsed["suggestions"].as_array().unwrap().len(), 0);
    }
}
