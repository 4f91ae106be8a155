use std::error::Error;
use std::fmt::Formatter;

/// `Debug` body for error enums: the error itself, then every `source` below
/// it, one per paragraph. Log with `error.cause_chain = ?e`.
pub fn error_chain_fmt(
    e: &impl Error,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
