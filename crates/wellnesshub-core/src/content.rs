//! Static informational content: crisis resources, condition overviews
//! and the CBT thought record structure.
//!
//! All of this is fixed editorial content compiled into the binary. None
//! of it is user data and none of it is persisted.

use serde::Serialize;

/// A crisis hotline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
    pub availability: &'static str,
    pub languages: &'static str,
}

/// One step of the immediate safety plan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SafetyStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// A common mental health condition overview.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Condition {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
}

/// One prompt of the CBT thought record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThoughtRecordStep {
    pub number: u8,
    pub label: &'static str,
    pub prompt: &'static str,
    pub example: &'static str,
    pub required: bool,
}

pub const HOTLINES: [Hotline; 6] = [
    Hotline {
        name: "988 Suicide & Crisis Lifeline",
        number: "988",
        description: "24/7 free and confidential support for people in distress",
        availability: "24/7",
        languages: "English, Spanish",
    },
    Hotline {
        name: "Crisis Text Line",
        number: "Text HOME to 741741",
        description: "Free, 24/7 crisis support via text message",
        availability: "24/7",
        languages: "English, Spanish",
    },
    Hotline {
        name: "National Domestic Violence Hotline",
        number: "1-800-799-7233",
        description: "Support for domestic violence survivors",
        availability: "24/7",
        languages: "Multiple languages",
    },
    Hotline {
        name: "SAMHSA National Helpline",
        number: "1-800-662-4357",
        description: "Treatment referral and information service",
        availability: "24/7",
        languages: "English, Spanish",
    },
    Hotline {
        name: "National Sexual Assault Hotline",
        number: "1-800-656-4673",
        description: "Support for sexual assault survivors",
        availability: "24/7",
        languages: "English, Spanish",
    },
    Hotline {
        name: "Trans Lifeline",
        number: "877-565-8860",
        description: "Crisis support for transgender individuals",
        availability: "Varies",
        languages: "English",
    },
];

pub const SAFETY_STEPS: [SafetyStep; 5] = [
    SafetyStep {
        step: 1,
        title: "Ensure Safety",
        description: "If you or someone else is in immediate danger, call 911 or go to the nearest emergency room.",
    },
    SafetyStep {
        step: 2,
        title: "Reach Out",
        description: "Contact a crisis hotline, trusted friend, family member, or mental health professional.",
    },
    SafetyStep {
        step: 3,
        title: "Stay Connected",
        description: "Don't isolate yourself. Stay with someone you trust or in a safe environment.",
    },
    SafetyStep {
        step: 4,
        title: "Remove Means",
        description: "Remove or secure any items that could be used for self-harm.",
    },
    SafetyStep {
        step: 5,
        title: "Follow Up",
        description: "Make a plan for ongoing support and professional help.",
    },
];

pub const CONDITIONS: [Condition; 6] = [
    Condition {
        id: "anxiety",
        title: "Anxiety Disorders",
        icon: "😰",
        description: "Excessive worry, fear, or nervousness that interferes with daily activities.",
        symptoms: &[
            "Persistent worry or fear",
            "Restlessness or feeling on edge",
            "Difficulty concentrating",
            "Physical symptoms like rapid heartbeat",
        ],
    },
    Condition {
        id: "depression",
        title: "Depression",
        icon: "😔",
        description: "Persistent feelings of sadness, hopelessness, and loss of interest in activities.",
        symptoms: &[
            "Persistent sad or empty mood",
            "Loss of interest in activities",
            "Fatigue or decreased energy",
            "Changes in appetite or weight",
        ],
    },
    Condition {
        id: "bipolar",
        title: "Bipolar Disorder",
        icon: "🎭",
        description: "Extreme mood swings between manic highs and depressive lows.",
        symptoms: &[
            "Manic episodes: elevated mood, increased energy",
            "Depressive episodes: sadness, hopelessness",
            "Rapid speech during manic phases",
            "Impulsive behavior",
        ],
    },
    Condition {
        id: "ptsd",
        title: "Post-Traumatic Stress Disorder (PTSD)",
        icon: "⚡",
        description: "Mental health condition triggered by experiencing or witnessing a traumatic event.",
        symptoms: &[
            "Intrusive memories or flashbacks",
            "Nightmares about the trauma",
            "Avoiding trauma-related triggers",
            "Negative changes in thinking and mood",
        ],
    },
    Condition {
        id: "ocd",
        title: "Obsessive-Compulsive Disorder (OCD)",
        icon: "🔄",
        description: "Unwanted, intrusive thoughts (obsessions) and repetitive behaviors (compulsions).",
        symptoms: &[
            "Persistent, unwanted thoughts",
            "Repetitive behaviors or mental acts",
            "Fear of contamination",
            "Need for symmetry or order",
        ],
    },
    Condition {
        id: "adhd",
        title: "Attention-Deficit/Hyperactivity Disorder (ADHD)",
        icon: "🌪️",
        description: "Persistent pattern of inattention and/or hyperactivity-impulsivity.",
        symptoms: &[
            "Difficulty paying attention",
            "Hyperactivity and restlessness",
            "Impulsive behavior",
            "Difficulty organizing tasks",
        ],
    },
];

pub const THOUGHT_RECORD_STEPS: [ThoughtRecordStep; 7] = [
    ThoughtRecordStep {
        number: 1,
        label: "Situation",
        prompt: "What happened? Where were you? Who were you with?",
        example: "I made a mistake in a presentation at work.",
        required: true,
    },
    ThoughtRecordStep {
        number: 2,
        label: "Automatic Thought(s)",
        prompt: "What went through your mind? What did you think would happen?",
        example: "'I'm so incompetent. Everyone thinks I'm a failure.'",
        required: true,
    },
    ThoughtRecordStep {
        number: 3,
        label: "Emotions",
        prompt: "What did you feel? Rate the intensity (0-100%).",
        example: "Anxiety (90%), Shame (80%)",
        required: true,
    },
    ThoughtRecordStep {
        number: 4,
        label: "Evidence FOR the thought",
        prompt: "What facts support this thought?",
        example: "I stumbled over a few words.",
        required: false,
    },
    ThoughtRecordStep {
        number: 5,
        label: "Evidence AGAINST the thought",
        prompt: "What facts contradict this thought?",
        example: "My boss said it was a good presentation overall. A colleague told me they found it helpful.",
        required: false,
    },
    ThoughtRecordStep {
        number: 6,
        label: "Alternative/Balanced Thought",
        prompt: "What's a more realistic way of looking at the situation?",
        example: "'I made a small mistake, but it doesn't mean I'm a failure. Most of the presentation went well, and I can learn from this.'",
        required: true,
    },
    ThoughtRecordStep {
        number: 7,
        label: "Outcome",
        prompt: "How do you feel now? Rate your emotions again.",
        example: "Anxiety (40%), Relief (60%)",
        required: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotlines_include_the_lifeline() {
        assert_eq!(HOTLINES[0].number, "988");
        assert_eq!(HOTLINES.len(), 6);
    }

    #[test]
    fn safety_steps_are_ordered() {
        let numbers: Vec<u8> = SAFETY_STEPS.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn thought_record_optional_steps_are_the_evidence_pair() {
        let optional: Vec<u8> = THOUGHT_RECORD_STEPS
            .iter()
            .filter(|s| !s.required)
            .map(|s| s.number)
            .collect();
        assert_eq!(optional, vec![4, 5]);
    }
}
