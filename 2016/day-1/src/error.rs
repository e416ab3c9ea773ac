use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RouteError {
    #[error("invalid instruction format: {reason}")]
    #[diagnostic(
        code(aoc2016_day_1::invalid_instruction),
        help("instructions are a turn (`R` or `L`) followed by at least one block, e.g. `R2, L13`")
    )]
    InvalidInstructionFormat {
        #[source_code]
        src: String,

        #[label("{reason}")]
        span: SourceSpan,

        reason: String,
    },

    #[error("headquarters not found: no intersection was visited twice in {steps} steps")]
    #[diagnostic(
        code(aoc2016_day_1::headquarters_not_found),
        help("the route never crosses itself, so there is no first repeated intersection")
    )]
    HeadquartersNotFound { steps: u64 },
}
