use super::model::{
    DetailCarousel, DetailCategory, DetailClick, PrimaryCarousel, SlotPosition, SwipeDirection,
    SwipeGesture, WindowSize,
};

/// Canonical starting slot: the middle of the default 3-element window.
pub const CANONICAL_START: usize = 1;

/// Signed circular offset of `index` from `active`, normalized into
/// `(-len/2, len/2]`. This single value drives both role assignment and the
/// renderer's depth/rotation parameters.
pub fn signed_offset(index: usize, active: usize, len: usize) -> i64 {
    if len == 0 {
        return 0;
    }

    let len = len as i64;
    let mut diff = (index as i64 - active as i64).rem_euclid(len);
    if 2 * diff > len {
        diff -= len;
    }
    diff
}

/// Center slot for a freshly selected image set: the middle element,
/// index 0 when the set is empty.
pub fn recenter(len: usize) -> usize {
    len / 2
}

fn slot_for_offset(offset: i64, side: i64) -> SlotPosition {
    match offset {
        0 => SlotPosition::Center,
        1 => SlotPosition::Right,
        -1 => SlotPosition::Left,
        2 if side >= 2 => SlotPosition::FarRight,
        -2 if side >= 2 => SlotPosition::FarLeft,
        _ => SlotPosition::Hidden,
    }
}

impl PrimaryCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            active_index: CANONICAL_START,
            len,
        }
    }

    /// Rebind to a new filtered subset and reset to the canonical slot.
    /// Unconditional on any filter change, including ones that followed an
    /// error path.
    pub fn reset(&mut self, len: usize) {
        self.active_index = CANONICAL_START;
        self.len = len;
    }

    pub fn position_of(&self, index: usize) -> SlotPosition {
        if self.len == 0 {
            return SlotPosition::Hidden;
        }
        slot_for_offset(signed_offset(index, self.active_index, self.len), 2)
    }

    /// Click-to-rotate. Far slots are excluded from hit-testing, so a click
    /// on one is ignored.
    pub fn rotate_to(&mut self, index: usize) {
        if index < self.len && self.position_of(index).is_interactive() {
            self.active_index = index;
        }
    }

    pub fn rotate_next(&mut self) {
        if self.len > 0 {
            self.active_index = (self.active_index + 1) % self.len;
        }
    }

    pub fn rotate_prev(&mut self) {
        if self.len > 0 {
            self.active_index = (self.active_index + self.len - 1) % self.len;
        }
    }
}

impl DetailCarousel {
    /// Opens on the Cabin tab, centered on the middle of that bucket.
    pub fn new(cabin_len: usize) -> Self {
        Self {
            category: DetailCategory::Cabin,
            active_index: recenter(cabin_len),
        }
    }

    /// Switch tabs. Re-selecting the current tab is a no-op so the index is
    /// not pointlessly recentered mid-browse.
    pub fn switch_category(&mut self, category: DetailCategory, bucket_len: usize) {
        if self.category == category {
            return;
        }
        self.category = category;
        self.active_index = recenter(bucket_len);
    }

    pub fn position_of(&self, index: usize, len: usize, window: WindowSize) -> SlotPosition {
        if len == 0 {
            return SlotPosition::Hidden;
        }
        slot_for_offset(signed_offset(index, self.active_index, len), window.side())
    }

    /// First click on a slot rotates it to center; a click on the slot that
    /// is already centered opens the preview instead, leaving the index
    /// untouched.
    pub fn select_or_preview(&mut self, index: usize) -> DetailClick {
        if index == self.active_index {
            DetailClick::Preview
        } else {
            self.active_index = index;
            DetailClick::Rotated
        }
    }

    pub fn rotate_next(&mut self, len: usize) {
        if len > 0 {
            self.active_index = (self.active_index + 1) % len;
        }
    }

    pub fn rotate_prev(&mut self, len: usize) {
        if len > 0 {
            self.active_index = (self.active_index + len - 1) % len;
        }
    }
}

impl SwipeGesture {
    pub fn begin(origin_x: f32) -> Self {
        Self {
            origin_x,
            fired: false,
        }
    }

    /// Feed a move event. Returns a rotation at most once per gesture, the
    /// first time the drag crosses `threshold` pixels.
    pub fn drag(&mut self, x: f32, threshold: f32) -> Option<SwipeDirection> {
        if self.fired {
            return None;
        }

        let delta = x - self.origin_x;
        if delta.abs() < threshold {
            return None;
        }

        self.fired = true;
        if delta < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_pure_in_circular_distance() {
        // Same (index - active) mod len, same offset, for every window size.
        for len in [3usize, 5] {
            for active in 0..len {
                for index in 0..len {
                    let shifted = signed_offset((index + 1) % len, (active + 1) % len, len);
                    assert_eq!(signed_offset(index, active, len), shifted);
                }
            }
        }
    }

    #[test]
    fn three_wide_roles() {
        let carousel = PrimaryCarousel {
            active_index: 1,
            len: 3,
        };
        assert_eq!(carousel.position_of(1), SlotPosition::Center);
        assert_eq!(carousel.position_of(2), SlotPosition::Right);
        assert_eq!(carousel.position_of(0), SlotPosition::Left);
    }

    #[test]
    fn five_wide_roles_including_far_slots() {
        let carousel = PrimaryCarousel {
            active_index: 2,
            len: 5,
        };
        assert_eq!(carousel.position_of(2), SlotPosition::Center);
        assert_eq!(carousel.position_of(3), SlotPosition::Right);
        assert_eq!(carousel.position_of(1), SlotPosition::Left);
        assert_eq!(carousel.position_of(4), SlotPosition::FarRight);
        assert_eq!(carousel.position_of(0), SlotPosition::FarLeft);
    }

    #[test]
    fn rotating_by_one_shifts_every_role_one_step() {
        let mut carousel = PrimaryCarousel {
            active_index: 2,
            len: 5,
        };
        let before: Vec<i64> = (0..5).map(|i| signed_offset(i, carousel.active_index, 5)).collect();
        carousel.rotate_next();
        let after: Vec<i64> = (0..5).map(|i| signed_offset(i, carousel.active_index, 5)).collect();

        for i in 0..5 {
            let expected = before[i] - 1;
            let expected = if 2 * expected <= -5 { expected + 5 } else { expected };
            assert_eq!(after[i], expected);
        }
    }

    #[test]
    fn far_slots_do_not_rotate_on_click() {
        let mut carousel = PrimaryCarousel {
            active_index: 2,
            len: 5,
        };
        carousel.rotate_to(0); // far-left, not hit-testable
        assert_eq!(carousel.active_index, 2);
        carousel.rotate_to(3);
        assert_eq!(carousel.active_index, 3);
    }

    #[test]
    fn rotate_wraps_both_ways() {
        let mut carousel = PrimaryCarousel {
            active_index: 0,
            len: 3,
        };
        carousel.rotate_prev();
        assert_eq!(carousel.active_index, 2);
        carousel.rotate_next();
        assert_eq!(carousel.active_index, 0);
    }

    #[test]
    fn empty_list_exposes_no_roles() {
        let carousel = PrimaryCarousel::new(0);
        assert_eq!(carousel.position_of(0), SlotPosition::Hidden);
    }

    #[test]
    fn switch_category_recenters() {
        let mut detail = DetailCarousel::new(5);
        assert_eq!(detail.active_index, 2);

        detail.switch_category(DetailCategory::Deck, 4);
        assert_eq!(detail.active_index, 2);

        detail.switch_category(DetailCategory::Yacht, 3);
        assert_eq!(detail.active_index, 1);

        detail.switch_category(DetailCategory::Price, 0);
        assert_eq!(detail.active_index, 0);
    }

    #[test]
    fn switch_category_is_idempotent() {
        let mut detail = DetailCarousel::new(5);
        detail.select_or_preview(4);
        detail.switch_category(DetailCategory::Cabin, 5);
        assert_eq!(detail.category, DetailCategory::Cabin);
        assert_eq!(detail.active_index, 4);
    }

    #[test]
    fn centered_click_previews_without_moving() {
        let mut detail = DetailCarousel::new(5);
        assert_eq!(detail.select_or_preview(2), DetailClick::Preview);
        assert_eq!(detail.active_index, 2);

        assert_eq!(detail.select_or_preview(0), DetailClick::Rotated);
        assert_eq!(detail.active_index, 0);
    }

    #[test]
    fn window_size_bounds_rendering() {
        let detail = DetailCarousel {
            category: DetailCategory::Cabin,
            active_index: 2,
        };
        // 3-wide: only one slot each side renders.
        assert_eq!(detail.position_of(4, 5, WindowSize::Three), SlotPosition::Hidden);
        assert_eq!(detail.position_of(3, 5, WindowSize::Three), SlotPosition::Right);
        // 5-wide: two slots each side.
        assert_eq!(detail.position_of(4, 5, WindowSize::Five), SlotPosition::FarRight);
        assert_eq!(detail.position_of(0, 5, WindowSize::Five), SlotPosition::FarLeft);
    }

    #[test]
    fn swipe_fires_once_per_gesture() {
        let mut gesture = SwipeGesture::begin(100.0);
        assert_eq!(gesture.drag(80.0, 40.0), None);
        assert_eq!(gesture.drag(40.0, 40.0), Some(SwipeDirection::Next));
        // Still dragging further does not double-count.
        assert_eq!(gesture.drag(-200.0, 40.0), None);

        let mut gesture = SwipeGesture::begin(0.0);
        assert_eq!(gesture.drag(50.0, 40.0), Some(SwipeDirection::Prev));
    }
}
