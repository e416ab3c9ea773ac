use miette::*;

use crate::route::Route;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let route: Route = input.parse()?;

    Ok(route.final_distance().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("R2, L3", "5")]
    #[case("R2, R2, R2", "2")]
    #[case("R5, L5, R5, R3", "12")]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn trailing_newline() -> Result<()> {
        assert_eq!("12", process("R5, L5, R5, R3\n")?);
        Ok(())
    }

    #[test]
    fn empty_document() -> Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }

    #[test]
    fn bad_instruction() {
        let report = process("R2, X3").unwrap_err();
        assert!(report.to_string().contains("invalid instruction format"));
    }
}
