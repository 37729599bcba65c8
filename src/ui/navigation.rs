use strum::IntoEnumIterator;

use crate::domain::Section;

/// Single-selection navigation: exactly one declared section is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    sections: Vec<Section>,
    active: Section,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Section::iter().collect(), Section::default())
    }
}

impl ViewController {
    /// `initial` falls back to the first declared section when it is not
    /// declared itself. An empty declaration declares every section; repeated
    /// sections keep their first position.
    pub fn new(declared: Vec<Section>, initial: Section) -> Self {
        let mut sections: Vec<Section> = Vec::with_capacity(declared.len());
        for section in declared {
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        if sections.is_empty() {
            sections = Section::iter().collect();
        }
        let active = if sections.contains(&initial) {
            initial
        } else {
            sections[0]
        };
        Self { sections, active }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Makes `target` the only active section. Undeclared targets are
    /// ignored and the current selection stays. Returns whether `target`
    /// is now active.
    pub fn activate(&mut self, target: Section) -> bool {
        if !self.sections.contains(&target) {
            return false;
        }
        self.active = target;
        true
    }

    /// Like `activate`, from a section id such as `"budget"`.
    pub fn activate_by_id(&mut self, id: &str) -> bool {
        match Section::from_id(id) {
            Some(section) => self.activate(section),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(nav: &ViewController) -> usize {
        nav.sections().iter().filter(|s| nav.is_active(**s)).count()
    }

    #[test]
    fn repeated_declarations_render_one_active_item() {
        use Section::*;

        let mut nav = ViewController::new(vec![Budget, Objectives, Budget], Budget);
        assert_eq!(nav.sections(), &[Budget, Objectives]);
        assert_eq!(active_count(&nav), 1);

        nav.activate(Objectives);
        assert_eq!(active_count(&nav), 1);
    }

    #[test]
    fn starts_on_default_section() {
        let nav = ViewController::default();
        assert_eq!(nav.active(), Section::Objectives);
        assert_eq!(active_count(&nav), 1);
    }

    #[test]
    fn activation_swaps_exactly_one_section() {
        let mut nav = ViewController::default();
        assert!(nav.activate(Section::Budget));

        assert!(nav.is_active(Section::Budget));
        assert!(!nav.is_active(Section::Objectives));
        assert_eq!(active_count(&nav), 1);
    }

    #[test]
    fn undeclared_target_is_a_silent_no_op() {
        let mut nav = ViewController::new(vec![Section::Objectives, Section::Budget], Section::Budget);
        assert!(!nav.activate(Section::Launch));
        assert!(!nav.activate_by_id("nowhere"));
        assert_eq!(nav.active(), Section::Budget);
        assert_eq!(active_count(&nav), 1);
    }

    #[test]
    fn activates_by_section_id() {
        let mut nav = ViewController::default();
        assert!(nav.activate_by_id("tracking"));
        assert_eq!(nav.active(), Section::Tracking);
    }

    #[test]
    fn undeclared_initial_falls_back_to_first_section() {
        let nav = ViewController::new(vec![Section::Content, Section::Launch], Section::Objectives);
        assert_eq!(nav.active(), Section::Content);
    }
}
