use ridge_derive::ridge_error;
use std::borrow::Cow;

#[ridge_error]
pub enum RenderError {
    #[error("Write error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Markup rejected{}: {reason}", format_context(.context))]
    Rejected { reason: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn write_page() -> Result<(), RenderError> {
    Err::<(), _>(std::io::Error::other("closed")).context("Writing page")?;
    Ok(())
}

fn main() {
    let err = write_page().expect_err("write should fail");
    assert_eq!(err.to_string(), "Write error (Writing page): closed");

    let rejected: Result<(), RenderError> =
        Err(RenderError::Rejected { reason: "empty tag".into(), context: None });
    let err = rejected.context("Validating page").expect_err("still an error");
    assert_eq!(err.to_string(), "Markup rejected (Validating page): empty tag");
}
