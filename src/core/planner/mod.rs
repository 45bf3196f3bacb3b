//! Bounded, ordered course planner with 1-based positions
//!
//! Positions seen by callers run from 1 to `len()`; they are translated to
//! 0-based storage indices only inside this module.

pub mod error;
pub mod table;

pub use error::PlannerError;

use crate::core::models::Course;
use std::fmt;

/// Maximum number of courses a planner can hold
pub const MAX_COURSES: usize = 50;

/// An ordered list of at most [`MAX_COURSES`] courses
///
/// Cloning copies every course, so a clone never shares state with its source.
/// Two planners are equal when they hold equal courses in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Planner {
    courses: Vec<Course>,
}

impl Planner {
    /// Create an empty planner
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: Vec::with_capacity(MAX_COURSES),
        }
    }

    /// Number of courses currently in the planner
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the planner holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether the planner has reached [`MAX_COURSES`]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.courses.len() >= MAX_COURSES
    }

    /// Maximum number of courses this planner accepts
    #[must_use]
    pub const fn capacity(&self) -> usize {
        MAX_COURSES
    }

    /// Insert a course at a 1-based position
    ///
    /// Courses at `position` and later move one slot towards the end.
    ///
    /// # Arguments
    /// * `course` - Course to insert
    /// * `position` - Target position, from 1 to `len() + 1`
    ///
    /// # Errors
    /// - [`PlannerError::Full`] if the planner already holds [`MAX_COURSES`] courses
    /// - [`PlannerError::InvalidPosition`] if `position` is outside `1..=len() + 1`
    ///
    /// The planner is unchanged on error.
    pub fn add_course(&mut self, course: Course, position: usize) -> Result<(), PlannerError> {
        if self.is_full() {
            return Err(PlannerError::Full {
                capacity: self.capacity(),
            });
        }

        let max = self.len() + 1;
        if position == 0 || position > max {
            return Err(PlannerError::InvalidPosition { position, max });
        }

        self.courses.insert(position - 1, course);
        Ok(())
    }

    /// Append a course after the last one
    ///
    /// # Errors
    /// Returns [`PlannerError::Full`] if the planner is full.
    pub fn append_course(&mut self, course: Course) -> Result<(), PlannerError> {
        self.add_course(course, self.len() + 1)
    }

    /// Remove and return the course at a 1-based position
    ///
    /// Courses after `position` move one slot towards the front.
    ///
    /// # Errors
    /// - [`PlannerError::Empty`] if there are no courses
    /// - [`PlannerError::InvalidPosition`] if `position` is outside `1..=len()`
    pub fn remove_course(&mut self, position: usize) -> Result<Course, PlannerError> {
        let index = self.index_of(position)?;
        Ok(self.courses.remove(index))
    }

    /// Get the course at a 1-based position
    ///
    /// # Errors
    /// - [`PlannerError::Empty`] if there are no courses
    /// - [`PlannerError::InvalidPosition`] if `position` is outside `1..=len()`
    pub fn get_course(&self, position: usize) -> Result<&Course, PlannerError> {
        let index = self.index_of(position)?;
        Ok(&self.courses[index])
    }

    /// Check whether a structurally equal course is in the planner
    ///
    /// # Errors
    /// Returns [`PlannerError::Empty`] if there are no courses to search.
    pub fn exists(&self, course: &Course) -> Result<bool, PlannerError> {
        if self.is_empty() {
            return Err(PlannerError::Empty);
        }
        Ok(self.courses.contains(course))
    }

    /// 1-based position of the first course equal to `course`, if any
    #[must_use]
    pub fn position_of(&self, course: &Course) -> Option<usize> {
        self.courses
            .iter()
            .position(|c| c == course)
            .map(|index| index + 1)
    }

    /// Iterate over `(position, course)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Course)> {
        self.courses
            .iter()
            .enumerate()
            .map(|(index, course)| (index + 1, course))
    }

    /// Courses whose department matches `department` exactly (case-sensitive),
    /// in position order and paired with their positions
    pub fn filter<'a>(&'a self, department: &'a str) -> impl Iterator<Item = (usize, &'a Course)> {
        self.iter()
            .filter(move |(_, course)| course.department() == department)
    }

    /// Render the table for courses in `department`, keeping their original positions
    #[must_use]
    pub fn render_filtered(&self, department: &str) -> String {
        table::render(self.filter(department))
    }

    /// Convert a 1-based position into a storage index for read/remove access
    fn index_of(&self, position: usize) -> Result<usize, PlannerError> {
        if self.is_empty() {
            return Err(PlannerError::Empty);
        }
        let max = self.len();
        if position == 0 || position > max {
            return Err(PlannerError::InvalidPosition { position, max });
        }
        Ok(position - 1)
    }
}

impl fmt::Display for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        table::write_header(f)?;
        for (position, course) in self.iter() {
            table::write_row(f, position, course)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, department: &str, code: u32) -> Course {
        Course::new(name, department, code, 1, "Staff").unwrap()
    }

    fn sample() -> Planner {
        let mut planner = Planner::new();
        planner.append_course(course("Algorithms", "CS", 101)).unwrap();
        planner.append_course(course("Databases", "CS", 202)).unwrap();
        planner.append_course(course("Physics", "PHY", 150)).unwrap();
        planner
    }

    fn names(planner: &Planner) -> Vec<&str> {
        planner.iter().map(|(_, c)| c.name()).collect()
    }

    #[test]
    fn test_new_planner_is_empty() {
        let planner = Planner::new();
        assert_eq!(planner.len(), 0);
        assert!(planner.is_empty());
        assert!(!planner.is_full());
        assert_eq!(planner.capacity(), MAX_COURSES);
    }

    #[test]
    fn test_insert_in_middle_shifts_later_courses() {
        let mut planner = sample();
        planner.add_course(course("Compilers", "CS", 303), 2).unwrap();

        assert_eq!(
            names(&planner),
            vec!["Algorithms", "Compilers", "Databases", "Physics"]
        );
    }

    #[test]
    fn test_insert_at_front_and_end() {
        let mut planner = sample();
        planner.add_course(course("Intro", "CS", 100), 1).unwrap();
        planner.add_course(course("Capstone", "CS", 499), 5).unwrap();

        assert_eq!(planner.get_course(1).unwrap().name(), "Intro");
        assert_eq!(planner.get_course(5).unwrap().name(), "Capstone");
        assert_eq!(planner.len(), 5);
    }

    #[test]
    fn test_insert_position_out_of_range() {
        let mut planner = sample();

        assert_eq!(
            planner.add_course(course("X", "CS", 1), 0),
            Err(PlannerError::InvalidPosition { position: 0, max: 4 })
        );
        assert_eq!(
            planner.add_course(course("X", "CS", 1), 5),
            Err(PlannerError::InvalidPosition { position: 5, max: 4 })
        );
        assert_eq!(planner, sample());
    }

    #[test]
    fn test_empty_planner_accepts_only_position_one() {
        let mut planner = Planner::new();
        assert!(planner.add_course(course("X", "CS", 1), 2).is_err());
        planner.add_course(course("X", "CS", 1), 1).unwrap();
        assert_eq!(planner.len(), 1);
    }

    #[test]
    fn test_full_planner_rejects_insert() {
        let mut planner = Planner::new();
        for code in 0..50 {
            planner.append_course(course("Seminar", "SEM", code)).unwrap();
        }
        assert!(planner.is_full());

        let before = planner.clone();
        assert_eq!(
            planner.add_course(course("Extra", "SEM", 99), 1),
            Err(PlannerError::Full { capacity: 50 })
        );
        assert_eq!(planner, before);
    }

    #[test]
    fn test_full_takes_precedence_over_bad_position() {
        let mut planner = Planner::new();
        for code in 0..50 {
            planner.append_course(course("Seminar", "SEM", code)).unwrap();
        }
        assert!(matches!(
            planner.add_course(course("Extra", "SEM", 99), 0),
            Err(PlannerError::Full { .. })
        ));
    }

    #[test]
    fn test_remove_shifts_later_courses() {
        let mut planner = sample();
        let removed = planner.remove_course(2).unwrap();

        assert_eq!(removed.name(), "Databases");
        assert_eq!(names(&planner), vec!["Algorithms", "Physics"]);
    }

    #[test]
    fn test_remove_errors() {
        let mut empty = Planner::new();
        assert_eq!(empty.remove_course(1), Err(PlannerError::Empty));

        let mut planner = sample();
        assert_eq!(
            planner.remove_course(4),
            Err(PlannerError::InvalidPosition { position: 4, max: 3 })
        );
        assert_eq!(planner.len(), 3);
    }

    #[test]
    fn test_get_course_errors() {
        assert_eq!(Planner::new().get_course(1), Err(PlannerError::Empty));
        assert!(matches!(
            sample().get_course(0),
            Err(PlannerError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_exists_and_position_of() {
        let planner = sample();
        let physics = course("Physics", "PHY", 150);
        let chemistry = course("Chemistry", "CHM", 131);

        assert_eq!(planner.exists(&physics), Ok(true));
        assert_eq!(planner.exists(&chemistry), Ok(false));
        assert_eq!(planner.position_of(&physics), Some(3));
        assert_eq!(planner.position_of(&chemistry), None);
        assert_eq!(Planner::new().exists(&physics), Err(PlannerError::Empty));
    }

    #[test]
    fn test_filter_is_exact_and_ordered() {
        let planner = sample();

        let cs: Vec<(usize, &str)> = planner.filter("CS").map(|(p, c)| (p, c.name())).collect();
        assert_eq!(cs, vec![(1, "Algorithms"), (2, "Databases")]);

        assert_eq!(planner.filter("cs").count(), 0);
        assert_eq!(planner.filter("C").count(), 0);
        assert_eq!(Planner::new().filter("CS").count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.remove_course(1).unwrap();
        assert_eq!(original.len(), 3);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_equality_requires_same_length() {
        let mut shorter = sample();
        shorter.remove_course(3).unwrap();

        assert_ne!(sample(), shorter);
        assert_ne!(shorter, sample());
        assert_eq!(Planner::new(), Planner::default());
    }

    #[test]
    fn test_display_lists_courses_with_positions() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("No."));
        assert!(lines[2].starts_with("1   Algorithms"));
        assert!(lines[4].starts_with("3   Physics"));
    }

    #[test]
    fn test_render_filtered_keeps_original_positions() {
        let rendered = sample().render_filtered("PHY");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("3   Physics"));
    }
}
