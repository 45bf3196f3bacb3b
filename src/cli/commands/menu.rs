//! Interactive planner session
//!
//! Translates menu selections into [`Workspace`] and [`Planner`] calls and
//! renders their results, including planner errors, as console text.

use crate::prompt::Prompter;
use course_planner::config::{Config, MenuConfig};
use course_planner::core::models::{Course, MAX_DEPARTMENT_LEN, MAX_SECTION};
use course_planner::core::planner::{table, Planner, PlannerError};
use course_planner::core::Workspace;
use course_planner::{debug, error, info};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU_TEXT: &str = "
(A)  Add Course
(G)  Get Course
(R)  Remove Course
(P)  Print Courses in Planner
(F)  Filter by Department Code
(L)  Look For Course
(S)  Size
(B)  Backup
(PB) Print Courses in Backup
(RB) Revert to Backup
(Q)  Quit
";

const DEFAULT_PROMPT: &str = "Enter a selection: ";

/// Operations offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a course at a position
    Add,
    /// Show the course at a position
    Get,
    /// Remove the course at a position
    Remove,
    /// Print the active planner
    Print,
    /// Print courses of one department
    Filter,
    /// Search for a course
    Lookup,
    /// Print the number of courses
    Size,
    /// Copy the active planner into the backup slot
    Backup,
    /// Print the backup planner
    PrintBackup,
    /// Replace the active planner with the backup
    RevertBackup,
    /// End the session
    Quit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::Add),
            "g" => Ok(Self::Get),
            "r" => Ok(Self::Remove),
            "p" => Ok(Self::Print),
            "f" => Ok(Self::Filter),
            "l" => Ok(Self::Lookup),
            "s" => Ok(Self::Size),
            "b" => Ok(Self::Backup),
            "pb" => Ok(Self::PrintBackup),
            "rb" => Ok(Self::RevertBackup),
            "q" => Ok(Self::Quit),
            _ => Err(format!("Unknown selection: {s}")),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Add => "A",
            Self::Get => "G",
            Self::Remove => "R",
            Self::Print => "P",
            Self::Filter => "F",
            Self::Lookup => "L",
            Self::Size => "S",
            Self::Backup => "B",
            Self::PrintBackup => "PB",
            Self::RevertBackup => "RB",
            Self::Quit => "Q",
        };
        write!(f, "{key}")
    }
}

/// Whether the session keeps going after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run an interactive session on stdin/stdout
pub fn run(config: &Config, workspace: &mut Workspace) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    if let Err(e) = run_session(prompter, workspace, &config.menu) {
        error!("Planner session aborted: {e}");
        eprintln!("✗ Planner session aborted: {e}");
    }
}

/// Run the menu loop until the user quits or input ends
///
/// # Errors
/// Returns I/O errors from the underlying streams
pub fn run_session<R: BufRead, W: Write>(
    mut prompter: Prompter<R, W>,
    workspace: &mut Workspace,
    menu: &MenuConfig,
) -> io::Result<()> {
    let prompt = if menu.prompt.is_empty() {
        DEFAULT_PROMPT
    } else {
        menu.prompt.as_str()
    };

    loop {
        if menu.show_menu {
            writeln!(prompter.out(), "{MENU_TEXT}")?;
        }
        let Some(selection) = prompter.text(prompt)? else {
            break;
        };
        writeln!(prompter.out())?;

        let Ok(choice) = selection.parse::<MenuChoice>() else {
            debug!("Ignoring unknown menu selection '{selection}'");
            writeln!(
                prompter.out(),
                "Invalid input! Please enter one of the operations from the menu."
            )?;
            continue;
        };
        debug!("Menu selection: {choice}");

        if dispatch(choice, &mut prompter, workspace)? == Flow::Quit {
            break;
        }
    }

    writeln!(prompter.out(), "Program terminating successfully...")?;
    info!("Planner session ended");
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    prompter: &mut Prompter<R, W>,
    workspace: &mut Workspace,
) -> io::Result<Flow> {
    match choice {
        MenuChoice::Add => add_course(prompter, workspace.active_mut()),
        MenuChoice::Get => get_course(prompter, workspace.active()),
        MenuChoice::Remove => remove_course(prompter, workspace.active_mut()),
        MenuChoice::Print => {
            write!(prompter.out(), "{}", workspace.active())?;
            Ok(Flow::Continue)
        }
        MenuChoice::Filter => filter_courses(prompter, workspace.active()),
        MenuChoice::Lookup => look_for_course(prompter, workspace.active()),
        MenuChoice::Size => {
            let size = workspace.active().len();
            writeln!(prompter.out(), "There are {size} courses in the planner.")?;
            Ok(Flow::Continue)
        }
        MenuChoice::Backup => {
            workspace.save_backup();
            info!("Backed up {} courses", workspace.backup().len());
            writeln!(prompter.out(), "Created backup of the current planner.")?;
            Ok(Flow::Continue)
        }
        MenuChoice::PrintBackup => {
            write!(prompter.out(), "{}", workspace.backup())?;
            Ok(Flow::Continue)
        }
        MenuChoice::RevertBackup => {
            workspace.revert_to_backup();
            info!("Reverted to backup with {} courses", workspace.active().len());
            writeln!(prompter.out(), "Planner reverted to the backup.")?;
            Ok(Flow::Continue)
        }
        MenuChoice::Quit => Ok(Flow::Quit),
    }
}

/// Ask for all five course fields. `None` means input ended.
fn read_course<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Option<Course>> {
    let Some(name) = prompter.text("Enter course name: ")? else {
        return Ok(None);
    };

    let department = loop {
        let Some(department) = prompter.text("Enter department: ")? else {
            return Ok(None);
        };
        if department.chars().count() <= MAX_DEPARTMENT_LEN {
            break department;
        }
        writeln!(
            prompter.out(),
            "Invalid department code! Use at most {MAX_DEPARTMENT_LEN} characters."
        )?;
    };

    let Some(code) = prompter.parsed::<u32>(
        "Enter course code: ",
        "Invalid course code! Please enter a non-negative integer code.",
    )?
    else {
        return Ok(None);
    };

    let section = loop {
        let Some(section) = prompter.parsed::<u8>(
            "Enter course section: ",
            "Invalid course section! Please enter an integer from 0 to 127.",
        )?
        else {
            return Ok(None);
        };
        if section <= MAX_SECTION {
            break section;
        }
        writeln!(
            prompter.out(),
            "Invalid course section! Please enter an integer from 0 to {MAX_SECTION}."
        )?;
    };

    let Some(instructor) = prompter.text("Enter instructor: ")? else {
        return Ok(None);
    };

    match Course::new(name, department, code, section, instructor) {
        Ok(course) => Ok(Some(course)),
        Err(e) => {
            writeln!(prompter.out(), "Could not create course: {e}")?;
            Ok(None)
        }
    }
}

/// Ask for a 1-based position. Negative input maps to 0, which the planner rejects.
fn read_position<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Option<usize>> {
    let position = prompter.parsed::<i64>(
        "Enter position: ",
        "Please enter an integer position.",
    )?;
    Ok(position.map(|p| usize::try_from(p).unwrap_or(0)))
}

fn add_course<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    planner: &mut Planner,
) -> io::Result<Flow> {
    if planner.is_full() {
        writeln!(
            prompter.out(),
            "Cannot add any more courses: the planner holds its maximum of {} courses. Remove some courses first.",
            planner.capacity()
        )?;
        return Ok(Flow::Continue);
    }

    let Some(course) = read_course(prompter)? else {
        return Ok(Flow::Continue);
    };

    loop {
        let Some(position) = read_position(prompter)? else {
            return Ok(Flow::Continue);
        };

        match planner.add_course(course.clone(), position) {
            Ok(()) => {
                info!("Added {} at position {position}", course.label());
                writeln!(
                    prompter.out(),
                    "\n{} successfully added to planner.",
                    course.label()
                )?;
                return Ok(Flow::Continue);
            }
            Err(PlannerError::InvalidPosition { max, .. }) => {
                debug!("Rejected insert position {position} (valid 1..={max})");
                writeln!(
                    prompter.out(),
                    "\nInvalid position! There are currently {} courses in the planner, please choose a position from 1 to {max}.",
                    planner.len()
                )?;
            }
            Err(e) => {
                debug!("Add course failed: {e}");
                writeln!(prompter.out(), "\nCould not add course to planner: {e}")?;
                return Ok(Flow::Continue);
            }
        }
    }
}

fn get_course<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    planner: &Planner,
) -> io::Result<Flow> {
    let Some(position) = read_position(prompter)? else {
        return Ok(Flow::Continue);
    };

    match planner.get_course(position) {
        Ok(course) => write!(prompter.out(), "{}", table::render([(position, course)]))?,
        Err(e) => report_access_error(prompter, &e, "get course details")?,
    }
    Ok(Flow::Continue)
}

fn remove_course<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    planner: &mut Planner,
) -> io::Result<Flow> {
    let Some(position) = read_position(prompter)? else {
        return Ok(Flow::Continue);
    };

    match planner.remove_course(position) {
        Ok(course) => {
            info!("Removed {} from position {position}", course.label());
            writeln!(
                prompter.out(),
                "\n{} successfully removed from planner.",
                course.label()
            )?;
        }
        Err(e) => report_access_error(prompter, &e, "remove courses")?,
    }
    Ok(Flow::Continue)
}

fn report_access_error<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    err: &PlannerError,
    action: &str,
) -> io::Result<()> {
    debug!("Planner access failed: {err}");
    match err {
        PlannerError::Empty => writeln!(
            prompter.out(),
            "\nPlanner is empty! Please add courses to the planner to {action}."
        ),
        PlannerError::InvalidPosition { max, .. } => writeln!(
            prompter.out(),
            "\nInvalid position! There are currently {max} courses in the planner, please choose a position from 1 to {max}."
        ),
        other => writeln!(prompter.out(), "\n{other}"),
    }
}

fn filter_courses<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    planner: &Planner,
) -> io::Result<Flow> {
    let Some(department) = prompter.text("Enter department code: ")? else {
        return Ok(Flow::Continue);
    };
    write!(prompter.out(), "{}", planner.render_filtered(&department))?;
    Ok(Flow::Continue)
}

fn look_for_course<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    planner: &Planner,
) -> io::Result<Flow> {
    let Some(course) = read_course(prompter)? else {
        return Ok(Flow::Continue);
    };

    match planner.exists(&course) {
        Ok(true) => {
            let position = planner.position_of(&course).unwrap_or_default();
            writeln!(
                prompter.out(),
                "\n{} is found in the planner at position {position}.",
                course.label()
            )?;
        }
        Ok(false) => writeln!(prompter.out(), "\nCourse not found in planner.")?,
        Err(_) => writeln!(
            prompter.out(),
            "\nCourse does not exist as the planner is empty."
        )?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_menu() -> MenuConfig {
        MenuConfig {
            show_menu: false,
            prompt: String::new(),
        }
    }

    /// Run a scripted session and return the captured output
    fn run_script(workspace: &mut Workspace, script: &str) -> String {
        let mut output = Vec::new();
        let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
        run_session(prompter, workspace, &quiet_menu()).unwrap();
        String::from_utf8(output).unwrap()
    }

    const ADD_ALGORITHMS: &str = "a\nAlgorithms\nCS\n101\n1\nSmith\n1\n";
    const ADD_DATABASES: &str = "a\nDatabases\nCS\n202\n2\nJones\n2\n";
    const ADD_PHYSICS: &str = "a\nPhysics\nPHY\n150\n1\nLee\n3\n";

    fn three_courses() -> String {
        format!("{ADD_ALGORITHMS}{ADD_DATABASES}{ADD_PHYSICS}")
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("A".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!(" pb ".parse::<MenuChoice>(), Ok(MenuChoice::PrintBackup));
        assert_eq!("Rb".parse::<MenuChoice>(), Ok(MenuChoice::RevertBackup));
        assert!("x".parse::<MenuChoice>().is_err());
        assert_eq!(MenuChoice::RevertBackup.to_string(), "RB");
    }

    #[test]
    fn test_add_courses_and_print() {
        let mut workspace = Workspace::new();
        let output = run_script(&mut workspace, &format!("{}p\nq\n", three_courses()));

        assert_eq!(workspace.active().len(), 3);
        assert!(output.contains("CS 101.1 successfully added to planner."));
        assert!(output.contains("3   Physics"));
        assert!(output.contains("Program terminating successfully..."));
    }

    #[test]
    fn test_add_reprompts_invalid_position_and_department() {
        let mut workspace = Workspace::new();
        let output = run_script(&mut workspace, "a\nAlgorithms\nCOMP\nCS\n101\n1\nSmith\n3\n-1\n1\nq\n");

        assert!(output.contains("Invalid department code!"));
        assert_eq!(output.matches("Invalid position!").count(), 2);
        assert_eq!(workspace.active().get_course(1).unwrap().department(), "CS");
    }

    #[test]
    fn test_add_rejects_section_out_of_range() {
        let mut workspace = Workspace::new();
        let output = run_script(&mut workspace, "a\nAlgorithms\nCS\n101\n200\n5\nSmith\n1\nq\n");

        assert!(output.contains("Invalid course section!"));
        assert_eq!(workspace.active().get_course(1).unwrap().section(), 5);
    }

    #[test]
    fn test_add_to_full_planner_returns_to_menu() {
        let mut workspace = Workspace::new();
        for code in 0..50 {
            let course = Course::new("Seminar", "SEM", code, 1, "Staff").unwrap();
            workspace.active_mut().append_course(course).unwrap();
        }
        let output = run_script(&mut workspace, "a\ns\nq\n");

        assert!(output.contains("maximum of 50 courses"));
        assert!(output.contains("There are 50 courses in the planner."));
    }

    #[test]
    fn test_get_and_remove() {
        let mut workspace = Workspace::new();
        let script = format!("{}g\n2\nr\n1\ng\n1\nq\n", three_courses());
        let output = run_script(&mut workspace, &script);

        assert!(output.contains("2   Databases"));
        assert!(output.contains("CS 101.1 successfully removed from planner."));
        assert!(output.contains("1   Databases"));
        assert_eq!(workspace.active().len(), 2);
    }

    #[test]
    fn test_empty_planner_messages() {
        let mut workspace = Workspace::new();
        let output = run_script(&mut workspace, "g\n1\nr\n1\nl\nX\nCS\n1\n1\nY\nq\n");

        assert!(output.contains("Planner is empty! Please add courses to the planner to get course details."));
        assert!(output.contains("Planner is empty! Please add courses to the planner to remove courses."));
        assert!(output.contains("Course does not exist as the planner is empty."));
    }

    #[test]
    fn test_filter_and_lookup() {
        let mut workspace = Workspace::new();
        let script = format!(
            "{}f\nPHY\nl\nPhysics\nPHY\n150\n1\nLee\nl\nPhysics\nPHY\n150\n2\nLee\nq\n",
            three_courses()
        );
        let output = run_script(&mut workspace, &script);

        assert!(output.contains("3   Physics"));
        assert!(!output.contains("1   Algorithms"));
        assert!(output.contains("PHY 150.1 is found in the planner at position 3."));
        assert!(output.contains("Course not found in planner."));
    }

    #[test]
    fn test_backup_and_revert() {
        let mut workspace = Workspace::new();
        let script = format!("{ADD_ALGORITHMS}b\nr\n1\ns\nrb\ns\nq\n");
        let output = run_script(&mut workspace, &script);

        assert!(output.contains("Created backup of the current planner."));
        assert!(output.contains("There are 0 courses in the planner."));
        assert!(output.contains("There are 1 courses in the planner."));
        assert_eq!(workspace.active(), workspace.backup());
    }

    #[test]
    fn test_unknown_selection_and_end_of_input() {
        let mut workspace = Workspace::new();
        let output = run_script(&mut workspace, "zz\n");

        assert!(output.contains("Invalid input!"));
        assert!(output.contains("Program terminating successfully..."));
    }

    #[test]
    fn test_menu_is_printed_when_enabled() {
        let mut workspace = Workspace::new();
        let mut output = Vec::new();
        let prompter = Prompter::new(Cursor::new(b"q\n".to_vec()), &mut output);
        let menu = MenuConfig {
            show_menu: true,
            prompt: "> ".to_string(),
        };
        run_session(prompter, &mut workspace, &menu).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("(RB) Revert to Backup"));
        assert!(output.contains("> "));
    }
}
