use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;
use crate::config;
use crate::utils::roster::{Member, Roster};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Slide {index} is out of range for a roster of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }

    /// Maps a `KeyboardEvent.key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Backward),
            "ArrowRight" => Some(Direction::Forward),
            _ => None,
        }
    }

    /// Resolves a horizontal swipe from its start and end `screenX`.
    /// A leftward swipe moves forward, a rightward one moves back.
    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        if end_x < start_x - config::SWIPE_THRESHOLD {
            Some(Direction::Forward)
        } else if end_x > start_x + config::SWIPE_THRESHOLD {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// What the team section should paint for the current rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePlan {
    pub cards: Vec<Member>,
    pub active_indicator: usize,
    pub indicator_count: usize,
}

impl SlidePlan {
    pub fn is_active(&self, indicator: usize) -> bool {
        indicator == self.active_indicator
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    roster: Rc<Roster>,
    current: usize,
}

impl Carousel {
    pub fn new(roster: Rc<Roster>) -> Self {
        Self { roster, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self, direction: Direction) {
        let len = self.roster.len() as isize;
        self.current = (self.current as isize + direction.offset()).rem_euclid(len) as usize;
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.roster.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.current = index;
        Ok(())
    }

    /// Up to `WINDOW_SIZE` members starting at the current slide, wrapping
    /// around the roster. Short rosters repeat within the window.
    pub fn visible_window(&self) -> Vec<&Member> {
        let len = self.roster.len();
        (0..config::WINDOW_SIZE.min(len))
            .filter_map(|offset| self.roster.get((self.current + offset) % len))
            .collect()
    }

    pub fn render(&self) -> SlidePlan {
        SlidePlan {
            cards: self.visible_window().into_iter().cloned().collect(),
            active_indicator: self.current,
            indicator_count: self.roster.len(),
        }
    }
}

pub enum CarouselAction {
    Advance(Direction),
    JumpTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance(direction) => next.advance(direction),
            CarouselAction::JumpTo(index) => {
                if let Err(e) = next.jump_to(index) {
                    log::warn!("Ignoring indicator click: {}", e);
                    return self;
                }
            }
        }
        log::debug!("Team carousel at slide {}", next.current_index());
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> Member {
        Member {
            name: name.to_string(),
            role: format!("{} role", name),
            bio: String::new(),
            highlight: String::new(),
            badge: "*".to_string(),
            portrait: format!("images/people/{}.png", name),
        }
    }

    fn carousel_of(len: usize) -> Carousel {
        let members = (0..len).map(|i| member(&format!("m{}", i))).collect();
        Carousel::new(Rc::new(Roster::new(members).unwrap()))
    }

    fn window_names(carousel: &Carousel) -> Vec<String> {
        carousel.visible_window().iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn index_stays_in_range_for_any_walk() {
        for len in 1..=6 {
            let mut carousel = carousel_of(len);
            let walk = [1, 1, -1, -1, -1, -1, -1, 1, -1, 1, 1, 1, 1, 1, 1, 1, -1];
            for step in walk {
                let direction = if step > 0 { Direction::Forward } else { Direction::Backward };
                carousel.advance(direction);
                assert!(carousel.current_index() < len);
            }
        }
    }

    #[test]
    fn forward_then_back_restores_index() {
        let mut carousel = carousel_of(5);
        for start in 0..5 {
            carousel.jump_to(start).unwrap();
            carousel.advance(Direction::Forward);
            carousel.advance(Direction::Backward);
            assert_eq!(carousel.current_index(), start);
            carousel.advance(Direction::Backward);
            carousel.advance(Direction::Forward);
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn window_length_is_capped_at_four() {
        for len in 1..=7 {
            let carousel = carousel_of(len);
            assert_eq!(carousel.visible_window().len(), len.min(4));
        }
    }

    #[test]
    fn large_roster_window_has_distinct_members() {
        let mut carousel = carousel_of(6);
        carousel.jump_to(4).unwrap();
        assert_eq!(window_names(&carousel), vec!["m4", "m5", "m0", "m1"]);
    }

    #[test]
    fn short_roster_window_cycles() {
        let mut carousel = carousel_of(2);
        assert_eq!(window_names(&carousel), vec!["m0", "m1"]);
        carousel.advance(Direction::Forward);
        assert_eq!(window_names(&carousel), vec!["m1", "m0"]);

        let single = carousel_of(1);
        assert_eq!(window_names(&single), vec!["m0"]);
    }

    #[test]
    fn advance_forward_from_start() {
        let mut carousel = carousel_of(4);
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(window_names(&carousel), vec!["m1", "m2", "m3", "m0"]);
    }

    #[test]
    fn advance_backward_wraps_to_last() {
        let mut carousel = carousel_of(4);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(window_names(&carousel), vec!["m3", "m0", "m1", "m2"]);
    }

    #[test]
    fn jump_to_starts_window_at_target() {
        let mut carousel = carousel_of(4);
        carousel.jump_to(2).unwrap();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(window_names(&carousel)[0], "m2");
    }

    #[test]
    fn jump_out_of_range_is_rejected_without_moving() {
        let mut carousel = carousel_of(4);
        carousel.advance(Direction::Forward);
        assert_eq!(
            carousel.jump_to(4),
            Err(CarouselError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut carousel = carousel_of(4);
        carousel.advance(Direction::Backward);
        carousel.jump_to(1).unwrap();
        carousel.advance(Direction::Forward);
        let plan = carousel.render();
        let active: Vec<usize> = (0..plan.indicator_count).filter(|&i| plan.is_active(i)).collect();
        assert_eq!(active, vec![carousel.current_index()]);
        assert_eq!(plan.cards.len(), 4);
        assert_eq!(plan.cards[0].name, "m2");
    }

    #[test]
    fn render_has_no_side_effects() {
        let carousel = carousel_of(3);
        assert_eq!(carousel.render(), carousel.render());
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Backward));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Forward));
        assert_eq!(Direction::from_key("Escape"), None);
    }

    #[test]
    fn swipes_past_threshold_navigate() {
        assert_eq!(Direction::from_swipe(200.0, 140.0), Some(Direction::Forward));
        assert_eq!(Direction::from_swipe(140.0, 200.0), Some(Direction::Backward));
        assert_eq!(Direction::from_swipe(200.0, 170.0), None);
        assert_eq!(Direction::from_swipe(200.0, 150.0), None);
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let state = Rc::new(carousel_of(4));
        let state = state.reduce(CarouselAction::Advance(Direction::Backward));
        assert_eq!(state.current_index(), 3);
        let state = state.reduce(CarouselAction::JumpTo(1));
        assert_eq!(state.current_index(), 1);
        let state = state.reduce(CarouselAction::JumpTo(9));
        assert_eq!(state.current_index(), 1);
    }
}
