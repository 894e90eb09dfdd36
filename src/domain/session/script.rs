//! Static per-level conversation scripts.
//!
//! Each level carries exactly three prompts in two registers: the plain
//! conversation wording and the longer spoken variant used when prompts are
//! voiced aloud.

use super::Level;

/// Number of prompts in every level.
pub const PROMPTS_PER_LEVEL: usize = 3;

/// Fixed data describing one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelScript {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub prompts: [&'static str; PROMPTS_PER_LEVEL],
    pub spoken_prompts: [&'static str; PROMPTS_PER_LEVEL],
}

/// Returns the script for a level.
pub fn script_for(level: Level) -> &'static LevelScript {
    &SCRIPTS[(level.get() - 1) as usize]
}

static SCRIPTS: [LevelScript; 5] = [
    LevelScript {
        title: "Personal Foundations",
        description: "Explore your core values, beliefs, and personality traits",
        duration: "15-20 minutes",
        prompts: [
            "Tell me about your core values. What principles guide your daily decisions?",
            "How would your closest friends describe your personality?",
            "What experiences have shaped who you are today?",
        ],
        spoken_prompts: [
            "Hello! I'm your AI mentor. Let's start by getting to know you better. Tell me about your core values - what principles guide your daily decisions?",
            "That's fascinating. How would your closest friends describe your personality? What would they say are your strongest traits?",
            "I'd love to hear more about your journey. What experiences have shaped who you are today?",
        ],
    },
    LevelScript {
        title: "Emotional Intelligence",
        description: "Assess your emotional awareness and interpersonal skills",
        duration: "20-25 minutes",
        prompts: [
            "How do you typically handle stress or difficult emotions?",
            "Describe a time when you had to navigate a challenging interpersonal situation.",
            "What role does empathy play in your relationships?",
        ],
        spoken_prompts: [
            "Now let's explore your emotional intelligence. How do you typically handle stress or difficult emotions when they arise?",
            "Can you describe a time when you had to navigate a challenging interpersonal situation? How did you approach it?",
            "What role does empathy play in your relationships with others?",
        ],
    },
    LevelScript {
        title: "Goals & Ambitions",
        description: "Discuss your aspirations and what drives you forward",
        duration: "25-30 minutes",
        prompts: [
            "What are your biggest aspirations for the future?",
            "How do you define success in your life?",
            "What obstacles do you anticipate on your path to achieving your goals?",
        ],
        spoken_prompts: [
            "Let's talk about your future aspirations. What are your biggest goals and dreams for the years ahead?",
            "How do you personally define success in your life? What does it look like to you?",
            "What obstacles or challenges do you anticipate on your path to achieving these goals?",
        ],
    },
    LevelScript {
        title: "Challenges & Growth",
        description: "Examine how you handle obstacles and adapt to change",
        duration: "20-25 minutes",
        prompts: [
            "Tell me about a significant challenge you've overcome.",
            "How do you adapt when plans don't go as expected?",
            "What have been your most important learning experiences?",
        ],
        spoken_prompts: [
            "I'd like to understand your resilience. Tell me about a significant challenge you've overcome in your life.",
            "How do you typically adapt when plans don't go as expected? Can you give me an example?",
            "What have been your most important learning experiences, and how have they changed you?",
        ],
    },
    LevelScript {
        title: "Future Vision",
        description: "Final deep dive into your future self and potential",
        duration: "30-35 minutes",
        prompts: [
            "Where do you see yourself in the timeframe you specified?",
            "What kind of person do you want to become?",
            "What legacy do you want to leave behind?",
        ],
        spoken_prompts: [
            "This is our final conversation. Looking ahead to the timeframe you specified, where do you see yourself?",
            "What kind of person do you want to become? What qualities do you want to develop?",
            "What legacy do you want to leave behind? How do you want to be remembered?",
        ],
    },
];
