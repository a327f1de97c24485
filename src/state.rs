#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Selection<T>(Option<T>);

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection(None)
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn toggle(self, id: T) -> Self {
        if self.0.as_ref() == Some(&id) {
            Selection(None)
        } else {
            Selection(Some(id))
        }
    }

    pub fn clear(self) -> Self {
        Selection(None)
    }

    pub fn is_active(&self, id: &T) -> bool {
        self.0.as_ref() == Some(id)
    }

    pub fn active(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, tag: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(t) => t == tag,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Carousel {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Carousel {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn go_to(self, i: usize) -> Self {
        if self.len == 0 {
            return self;
        }
        Carousel {
            index: i % self.len,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Carousel, Filter, Selection};

    #[test]
    fn toggling_the_active_id_collapses_it() {
        let open = Selection::default().toggle("faq-1");
        assert!(open.is_active(&"faq-1"));
        let closed = open.toggle("faq-1");
        assert_eq!(closed.active(), None);
    }

    #[test]
    fn toggling_a_different_id_replaces_the_active_one() {
        let open = Selection::default().toggle("sarah-johnson");
        let moved = open.toggle("michael-chen");
        assert!(moved.is_active(&"michael-chen"));
        assert!(!moved.is_active(&"sarah-johnson"));
    }

    #[test]
    fn clear_drops_any_selection() {
        let open = Selection::default().toggle(3usize);
        assert_eq!(open.clear().active(), None);
    }

    #[test]
    fn filter_all_admits_every_tag() {
        let filter: Filter<&str> = Filter::All;
        assert!(filter.matches(&"web"));
        assert!(filter.matches(&"anything"));
    }

    #[test]
    fn filter_only_admits_equal_tags() {
        let filter = Filter::Only("mobile");
        assert!(filter.matches(&"mobile"));
        assert!(!filter.matches(&"web"));
    }

    #[test]
    fn filter_with_no_matching_tags_yields_an_empty_set() {
        let tags = ["web", "mobile", "cloud"];
        let filter = Filter::Only("ui");
        let visible: Vec<&str> = tags.into_iter().filter(|t| filter.matches(t)).collect();
        assert!(visible.is_empty());
    }

    #[test]
    fn carousel_next_and_prev_are_inverses_for_every_index() {
        let base = Carousel::new(4);
        for i in 0..4 {
            let at = base.go_to(i);
            assert_eq!(at.next().prev().index(), i);
            assert_eq!(at.prev().next().index(), i);
        }
    }

    #[test]
    fn carousel_wraps_at_both_ends() {
        let c = Carousel::new(3);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.go_to(2).next().index(), 0);
    }

    #[test]
    fn go_to_reduces_modulo_the_item_count() {
        let c = Carousel::new(4);
        assert_eq!(c.go_to(7).index(), 3);
    }

    #[test]
    fn empty_carousel_stays_inert() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.go_to(5).index(), 0);
    }
}
