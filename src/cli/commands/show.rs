//! Build and print a person

use log::debug;
use taxperson::core::models::{Person, ValidationPolicy};
use taxperson::output::{CodeResult, OutputMode, PersonResult, ValidationReport};

/// Build a person from the arguments and print it
///
/// An invalid code is reported like `validate` does and exits with status 1.
pub fn show(
    name: &str,
    surname: &str,
    code: &str,
    policy: ValidationPolicy,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match Person::with_policy(name, surname, code, policy) {
        Ok(person) => {
            PersonResult::from(&person).render(mode);
            Ok(())
        },
        Err(err) => {
            debug!("show rejected: {err}");
            let outcome: Result<String, _> = Err(err);
            ValidationReport::new(policy, vec![CodeResult::from_outcome(code, &outcome)])
                .render(mode);
            std::process::exit(1);
        },
    }
}
