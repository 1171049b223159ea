/// Blocking yes/no prompt that gates destructive roster operations
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// A fixed answer, e.g. one already collected from a submitted form
impl Confirm for bool {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_answers() {
        assert!(true.confirm("sure?"));
        assert!(!false.confirm("sure?"));
    }

    #[test]
    fn test_closure_sees_prompt() {
        let mut seen = Vec::new();
        let mut ask = |prompt: &str| {
            seen.push(prompt.to_string());
            false
        };

        assert!(!ask.confirm("Delete?"));
        assert_eq!(seen, vec!["Delete?".to_string()]);
    }
}
