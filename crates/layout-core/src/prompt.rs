//! Line-oriented prompts and request collection

use crate::error::{Result, ScaffoldError};
use crate::plan::FolderPlan;
use crate::request::{strip_line_ending, validate_project_name, ScaffoldRequest};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Interpret a yes/no answer: `y`, `yes` (any case) or an empty line
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "" | "y" | "yes")
}

/// Outcome of a yes/no prompt; end of input (`None`) counts as "no"
pub fn confirm_answer(answer: Option<&str>) -> bool {
    answer.is_some_and(is_affirmative)
}

/// Source of operator answers
pub trait Prompter {
    /// Show `question` and read one line without its line ending.
    /// Returns `None` when input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Ask a yes/no question. End of input counts as "no".
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("[ ? ] {} ", question))?;
        Ok(confirm_answer(answer.as_deref()))
    }
}

/// Plain prompter over any reader/writer pair (stdin/stdout in production)
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question).map_err(ScaffoldError::Prompt)?;
        self.output.flush().map_err(ScaffoldError::Prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(ScaffoldError::Prompt)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

/// Ask every question in order and assemble the request.
///
/// An invalid project name aborts immediately, before any other question.
pub fn collect_request<P: Prompter + ?Sized>(
    prompter: &mut P,
    plan: &FolderPlan,
) -> Result<ScaffoldRequest> {
    let raw_name = prompter.ask("Name of the project: ")?.unwrap_or_default();
    let project_name = validate_project_name(&raw_name)?;

    let description = prompter.ask("Project description: ")?.unwrap_or_default();
    let account_handle = prompter.ask("Github username: ")?.unwrap_or_default();

    let mut features = BTreeMap::new();
    for folder in &plan.optional {
        let wanted = prompter.confirm(&folder.prompt)?;
        features.insert(folder.name.clone(), wanted);
    }

    ScaffoldRequest::new(&project_name, description, account_handle, features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_affirmative_spellings() {
        for answer in ["y", "Y", "yes", "Yes", "YES", "yEs", ""] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_negative_spellings() {
        for answer in ["n", "no", "N", "nope", "yess", " y", "y ", "1", "true", "ye"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_confirm_answer_is_not_trimmed() {
        assert!(confirm_answer(Some("y")));
        assert!(confirm_answer(Some("")));
        assert!(!confirm_answer(Some("y ")));
        assert!(!confirm_answer(Some(" yes")));
        assert!(!confirm_answer(None));

        let mut p = prompter("y \n");
        assert!(!p.confirm("Will you need APIs?").unwrap());
    }

    #[test]
    fn test_ask_strips_newline_and_prints_question() {
        let mut p = prompter("hello\nworld\n");
        assert_eq!(p.ask("First: ").unwrap().as_deref(), Some("hello"));
        assert_eq!(p.ask("Second: ").unwrap().as_deref(), Some("world"));
        assert_eq!(p.ask("Third: ").unwrap(), None);

        let printed = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(printed, "First: Second: Third: ");
    }

    #[test]
    fn test_confirm_reads_answers() {
        let mut p = prompter("YES\n\nno\n");
        assert!(p.confirm("Will you need APIs?").unwrap());
        assert!(p.confirm("Will you need a server?").unwrap());
        assert!(!p.confirm("Will you need a database?").unwrap());
        // Input exhausted
        assert!(!p.confirm("Will you need scripts?").unwrap());

        let printed = String::from_utf8(p.into_output()).unwrap();
        assert!(printed.starts_with("[ ? ] Will you need APIs? "));
    }

    #[test]
    fn test_collect_request_in_order() {
        let mut p = prompter("demo\nA demo tool\nbob\ny\nn\nyes\n");
        let request = collect_request(&mut p, &FolderPlan::standard()).unwrap();

        assert_eq!(request.project_name(), "demo");
        assert_eq!(request.description(), "A demo tool");
        assert_eq!(request.account_handle(), "bob");
        assert!(request.wants("api"));
        assert!(!request.wants("server"));
        assert!(request.wants("db"));
        // Remaining prompts hit end of input
        assert!(!request.wants("scripts"));
        assert!(!request.wants("assets"));
        assert_eq!(request.features().len(), 7);
    }

    #[test]
    fn test_invalid_name_stops_before_other_prompts() {
        let mut p = prompter("not valid!\nA demo tool\nbob\n");
        let err = collect_request(&mut p, &FolderPlan::standard()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName(_)));

        let printed = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(printed, "Name of the project: ");
    }

    #[test]
    fn test_empty_input_is_invalid_name() {
        let mut p = prompter("");
        let err = collect_request(&mut p, &FolderPlan::standard()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName(_)));
    }
}
