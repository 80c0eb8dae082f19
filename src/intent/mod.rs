//! Keyword intent classification for the chat widget.
//!
//! Messages are matched against an ordered list of patterns and the first
//! match wins. There is no scoring. Patterns cover English and Turkish
//! phrasing.

use crate::roster::Skill;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Category a customer message falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Billing,
    Connectivity,
    PlanChange,
    Cancellation,
    TechnicalFault,
    Gratitude,
    Complaint,
    Unknown,
}

impl Intent {
    /// All intents in matching order; `Unknown` is the default and last.
    pub const ALL: [Intent; 9] = [
        Intent::Greeting,
        Intent::Billing,
        Intent::Connectivity,
        Intent::PlanChange,
        Intent::Cancellation,
        Intent::TechnicalFault,
        Intent::Gratitude,
        Intent::Complaint,
        Intent::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Billing => "billing",
            Intent::Connectivity => "connectivity",
            Intent::PlanChange => "plan_change",
            Intent::Cancellation => "cancellation",
            Intent::TechnicalFault => "technical_fault",
            Intent::Gratitude => "gratitude",
            Intent::Complaint => "complaint",
            Intent::Unknown => "unknown",
        }
    }

    /// Whether a conversation with this intent must be handed to a human.
    pub fn should_escalate(&self) -> bool {
        matches!(self, Intent::Cancellation | Intent::Complaint)
    }

    /// Skills an agent needs to take over a conversation with this intent.
    pub fn required_skills(&self) -> &'static [Skill] {
        match self {
            Intent::Billing => &[Skill::Billing],
            Intent::Connectivity => &[Skill::Technical, Skill::Fiber],
            Intent::PlanChange => &[Skill::Sales],
            Intent::Cancellation => &[Skill::Cancellation],
            Intent::TechnicalFault => &[Skill::Technical],
            Intent::Complaint => &[Skill::General],
            Intent::Greeting | Intent::Gratitude | Intent::Unknown => &[],
        }
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == wanted)
            .ok_or_else(|| format!("Unknown intent: {}", s))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub intent: Intent,
    /// Canned reply for the widget
    pub response: &'static str,
    /// Quick-reply buttons offered with the response
    pub suggestions: &'static [&'static str],
    pub should_escalate: bool,
}

struct IntentRule {
    intent: Intent,
    pattern: Regex,
    response: &'static str,
    suggestions: &'static [&'static str],
}

impl IntentRule {
    fn new(
        intent: Intent,
        pattern: &str,
        response: &'static str,
        suggestions: &'static [&'static str],
    ) -> Self {
        Self {
            intent,
            pattern: Regex::new(pattern).expect("intent pattern must compile"),
            response,
            suggestions,
        }
    }

    fn classification(&self) -> Classification {
        Classification {
            intent: self.intent,
            response: self.response,
            suggestions: self.suggestions,
            should_escalate: self.intent.should_escalate(),
        }
    }
}

/// Rules in matching order
static INTENT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        // Only matches at the start of the message
        IntentRule::new(
            Intent::Greeting,
            r"(?i)^(merhaba|selam|hey|günaydın|iyi günler|iyi akşamlar|hello|hi\b|good (morning|afternoon|evening))",
            "Hello! How can I help you today?",
            &["Billing question", "Internet problem", "Change my plan"],
        ),
        IntentRule::new(
            Intent::Billing,
            r"(?i)fatura|ödeme|borç|bakiye|hesap özeti|\bbill|\binvoice|\bpayment|\bbalance|\bcharged?\b",
            "I can help with your bill. Would you like to make a payment or see the invoice details?",
            &["Pay now", "Invoice details", "Payment history"],
        ),
        IntentRule::new(
            Intent::Connectivity,
            r"(?i)internet|hız|yavaş|bağlantı|kopuyor|çalışmıyor|online|\bspeed|\bslow|\bconnection|\bdisconnect|\bwi-?fi\b",
            "Some quick fixes for your connection:\n\n1. Restart your modem and wait 30 seconds\n2. Try a cable instead of Wi-Fi\n3. Check whether other devices are affected\n\nIs the problem still there?",
            &["Yes, still broken", "No, it's fixed", "Request a technician"],
        ),
        IntentRule::new(
            Intent::PlanChange,
            r"(?i)paket|tarife|değiştir|yükselt|indirim|kampanya|\bplan\b|\bpackage|\bupgrade|\bdowngrade|\bdiscount|\bpromotion",
            "Here are the plans available to you. Which one would you like to switch to?",
            &["200 Mbps", "500 Mbps", "Keep my current plan"],
        ),
        IntentRule::new(
            Intent::Cancellation,
            r"(?i)iptal|kapat|vazgeç|sonlandır|çıkmak|\bcancel|\bterminate|\bunsubscribe|close my account",
            "We'd hate to see you go. Let me connect you with a representative who can prepare an offer for you.",
            &["Talk to a representative", "Hear the offer first"],
        ),
        IntentRule::new(
            Intent::TechnicalFault,
            r"(?i)arıza|bozuk|çalışmıyor|sorun|hata|problem|\bbroken|\bfault|\berror|not working|\boutage",
            "I'm checking your line now. Would you like me to open a fault ticket for a detailed inspection?",
            &["Open a fault ticket", "More information", "Not needed"],
        ),
        IntentRule::new(
            Intent::Gratitude,
            r"(?i)teşekkür|sağol|harika|mükemmel|çok iyi|\bthank|\bgreat\b|\bawesome|\bperfect",
            "You're welcome! Is there anything else I can help with?",
            &["No, thanks", "I have another question"],
        ),
        IntentRule::new(
            Intent::Complaint,
            r"(?i)şikayet|memnun değil|kötü|berbat|rezalet|kızgın|\bcomplain|\bunhappy|\bterrible|\bawful|\bangry|\bdisappointed",
            "I'm very sorry about the trouble. Your complaint matters to us, so I'm connecting you with a representative right away.",
            &[],
        ),
    ]
});

const UNKNOWN_RESPONSE: &str =
    "I see. Could you tell me a bit more so I can help you in the best way?";

const UNKNOWN_SUGGESTIONS: &[&str] = &[
    "Billing",
    "Technical support",
    "Plan change",
    "Talk to a representative",
];

/// Classify a customer message.
///
/// The message is lower-cased and trimmed, then tested against each category
/// in order. Messages that match nothing are `Unknown`.
///
/// # Examples
///
/// ```
/// use switchboard::intent::{classify, Intent};
///
/// let result = classify("I want to cancel my subscription");
/// assert_eq!(result.intent, Intent::Cancellation);
/// assert!(result.should_escalate);
/// ```
pub fn classify(message: &str) -> Classification {
    let normalized = message.trim().to_lowercase();

    let classification = INTENT_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(&normalized))
        .map(IntentRule::classification)
        .unwrap_or(Classification {
            intent: Intent::Unknown,
            response: UNKNOWN_RESPONSE,
            suggestions: UNKNOWN_SUGGESTIONS,
            should_escalate: false,
        });

    tracing::debug!(
        intent = %classification.intent,
        escalate = classification.should_escalate,
        "Message classified"
    );

    classification
}
