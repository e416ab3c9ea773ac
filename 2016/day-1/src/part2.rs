use miette::*;

use crate::route::Route;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let route: Route = input.parse()?;

    Ok(route.headquarters_distance()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::RouteError;

    #[test]
    fn it_works() -> Result<()> {
        let input = "R8, R4, R4, R8";
        assert_eq!("4", process(input)?);
        Ok(())
    }

    #[test]
    fn route_without_crossing() {
        let report = process("R2, L3").unwrap_err();
        assert!(matches!(
            report.downcast_ref::<RouteError>(),
            Some(RouteError::HeadquartersNotFound { steps: 5 })
        ));
    }

    #[test]
    fn invalid_before_walking() {
        // R1 x4 would find headquarters at the origin, but R0 is rejected first
        let report = process("R1, R1, R1, R1, R0").unwrap_err();
        assert!(matches!(
            report.downcast_ref::<RouteError>(),
            Some(RouteError::InvalidInstructionFormat { .. })
        ));
    }
}
