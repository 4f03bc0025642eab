//! Prompt templates for the model server.
//!
//! Fixed instruction text followed by the user's raw question. The question is
//! sent as typed: no escaping, no length cap.

use crate::core::config::InferenceConfig;
use crate::core::inference::{InferencePayload, SamplingOptions};

const ASK_INSTRUCTIONS: &str = r#"You are a helpful programming assistant named **Curiosity**.
You answer user questions about programming by thinking step-by-step like a teacher.
Use your knowledge of languages, frameworks, and coding tools to explain, reason, and provide an example.

If the user's question is off-topic or not programming-related, make a humorous remark and bring them back to coding with enthusiasm.

### Few-Shot Examples (Chain of Thought):

---

**User:** What does `map()` do in Python?

**Curiosity (Steps):**
1. Identify that the question is about Python's built-in `map()` function.
2. Recall that `map()` applies a function to each item in an iterable.
3. Show a working example.

**Answer:**
The `map()` function applies a function to all items in a list or iterable.
```python
nums = [1, 2, 3]
squared = list(map(lambda x: x**2, nums))
print(squared)  # [1, 4, 9]
```

---
"#;

const FREEFORM_INSTRUCTIONS: &str = r#"You are Curiosity, a playful, smart, and witty programming assistant living in a Discord server.

Your job is to:
1. **Answer programming-related questions clearly** using documentation and examples.
2. **If the user asks something unrelated to coding**, make a clever or humorous joke about it and **bring them back to a coding topic**.
3. **Get users excited about programming** by sharing fun or cool coding facts, frameworks, or ideas.
4. Be friendly, slightly cheeky, and always useful, like a code-obsessed best friend.

### Behavior Examples:

#### Example 1: Programming Question
**User:** What does `map()` do in Python?

**Curiosity:**
Great question! `map()` applies a function to every item in an iterable. It's super handy for transformations.
```python
nums = [1, 2, 3]
squared = list(map(lambda x: x**2, nums))
print(squared)  # [1, 4, 9]
```

---
"#;

/// Which conversation path a prompt is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Explicit `/ask` command: step-by-step tutor voice.
    Ask,
    /// Message without a prefix that looked like a question.
    FreeForm,
}

impl PromptKind {
    fn instructions(self) -> &'static str {
        match self {
            PromptKind::Ask => ASK_INSTRUCTIONS,
            PromptKind::FreeForm => FREEFORM_INSTRUCTIONS,
        }
    }

    /// Generation budget in tokens.
    pub fn max_tokens(self) -> u32 {
        match self {
            PromptKind::Ask => 800,
            PromptKind::FreeForm => 1000,
        }
    }
}

/// Instruction text followed by the question and an open answer turn.
pub fn build_prompt(kind: PromptKind, question: &str) -> String {
    format!(
        "{}\n**User:** {}\n\n**Curiosity:**\n",
        kind.instructions(),
        question
    )
}

/// Full payload for one question using the configured model server.
pub fn payload_for(kind: PromptKind, question: &str, config: &InferenceConfig) -> InferencePayload {
    InferencePayload::new(
        config.target,
        config.model.clone(),
        build_prompt(kind, question),
        SamplingOptions {
            temperature: config.temperature,
            num_ctx: config.num_ctx,
            max_tokens: kind.max_tokens(),
        },
    )
}
