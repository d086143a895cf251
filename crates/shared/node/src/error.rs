use std::borrow::Cow;

#[ridge_derive::ridge_error]
pub enum RenderError {
    /// The destination writer rejected the rendered markup.
    #[error("Render output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
