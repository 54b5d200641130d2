use crate::app::AppContext;
use crate::domain::{FormAttributes, PromptText};

/// Execute the prompt command.
pub fn execute(ctx: &AppContext, attrs: &FormAttributes) -> PromptText {
    let prompt = ctx.synthesizer().synthesize(attrs);
    tracing::debug!(
        item_type = %attrs.item_type,
        prompt_len = prompt.as_str().len(),
        "synthesized prompt"
    );
    prompt
}
