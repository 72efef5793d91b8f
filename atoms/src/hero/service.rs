use super::model::{DetailScene, HeroScene, LoadState, SceneView};
use crate::carousel::{DetailCarousel, DetailCategory, DetailClick, PrimaryCarousel, SwipeDirection, WindowSize};
use crate::fleet::{vessel_by_id, Vessel};
use crate::pricing;

impl HeroScene {
    pub fn new(window: WindowSize) -> Self {
        Self {
            load: LoadState::Loading,
            vessels: Vec::new(),
            tiers: Vec::new(),
            active_tier: None,
            primary: PrimaryCarousel::new(0),
            detail: None,
            preview: None,
            window,
        }
    }

    /// Catalog fetch completed. Tiers are re-derived, the active tier is
    /// kept if it survived the reload, and the primary carousel resets to
    /// its canonical slot.
    pub fn vessels_loaded(&mut self, vessels: Vec<Vessel>) {
        self.vessels = vessels;
        self.load = LoadState::Ready;
        self.tiers = pricing::derive_price_tiers(&self.vessels);
        self.active_tier = pricing::select_active_tier(self.active_tier.as_deref(), &self.tiers);
        let len = self.filtered_vessels().len();
        self.primary.reset(len);
    }

    /// Catalog fetch failed. The scene renders an explicit error state, not
    /// an empty or broken one.
    pub fn load_failed(&mut self, error: String) {
        self.load = LoadState::Failed(error);
        self.vessels.clear();
        self.tiers.clear();
        self.active_tier = None;
        self.primary.reset(0);
        self.detail = None;
        self.preview = None;
    }

    /// Vessels shown by the primary carousel under the active filter.
    pub fn filtered_vessels(&self) -> Vec<Vessel> {
        pricing::filter_vessels(&self.vessels, self.active_tier.as_deref())
    }

    pub fn view(&self) -> SceneView {
        match &self.load {
            LoadState::Loading => SceneView::Loading,
            LoadState::Failed(_) => SceneView::Failed,
            LoadState::Ready if self.vessels.is_empty() => SceneView::EmptyFleet,
            LoadState::Ready if self.preview.is_some() => SceneView::Previewing,
            LoadState::Ready if self.detail.is_some() => SceneView::Detail,
            LoadState::Ready => SceneView::Browsing,
        }
    }

    fn frozen(&self) -> bool {
        self.preview.is_some() || !matches!(self.load, LoadState::Ready)
    }

    pub fn set_price_filter(&mut self, tier: &str) {
        if self.frozen() {
            return;
        }
        self.active_tier = Some(tier.to_string());
        let len = self.filtered_vessels().len();
        self.primary.reset(len);
    }

    pub fn click_vessel(&mut self, index: usize) {
        if self.frozen() || self.detail.is_some() {
            return;
        }
        self.primary.rotate_to(index);
    }

    pub fn swipe_vessels(&mut self, direction: SwipeDirection) {
        if self.frozen() || self.detail.is_some() {
            return;
        }
        match direction {
            SwipeDirection::Next => self.primary.rotate_next(),
            SwipeDirection::Prev => self.primary.rotate_prev(),
        }
    }

    /// Open the detail scene for the vessel at `index` in the filtered
    /// subset. The primary carousel keeps its index for when the detail
    /// view closes.
    pub fn show_details(&mut self, index: usize) {
        if self.frozen() || self.detail.is_some() {
            return;
        }
        let filtered = self.filtered_vessels();
        let Some(vessel) = filtered.get(index) else {
            return;
        };
        let cabin_len = vessel.images.cabin.len();
        self.detail = Some(DetailScene {
            vessel_id: vessel.id,
            carousel: DetailCarousel::new(cabin_len),
        });
    }

    /// Close detail and drop its carousel; the next open starts back on the
    /// Cabin tab.
    pub fn close_details(&mut self) {
        if self.preview.is_some() {
            return;
        }
        self.detail = None;
    }

    pub fn detail_vessel(&self) -> Option<&Vessel> {
        let detail = self.detail.as_ref()?;
        vessel_by_id(&self.vessels, detail.vessel_id)
    }

    /// Images behind the detail view's current tab.
    pub fn detail_images(&self) -> Vec<String> {
        let Some(detail) = self.detail.as_ref() else {
            return Vec::new();
        };
        let Some(vessel) = vessel_by_id(&self.vessels, detail.vessel_id) else {
            return Vec::new();
        };
        vessel.images.bucket(detail.carousel.category.bucket()).to_vec()
    }

    pub fn switch_category(&mut self, category: DetailCategory) {
        if self.frozen() {
            return;
        }
        let Some(detail) = self.detail.as_ref() else {
            return;
        };
        let Some(vessel) = vessel_by_id(&self.vessels, detail.vessel_id) else {
            return;
        };
        let bucket_len = vessel.images.bucket(category.bucket()).len();
        if let Some(detail) = self.detail.as_mut() {
            detail.carousel.switch_category(category, bucket_len);
        }
    }

    pub fn click_detail_image(&mut self, index: usize) {
        if self.frozen() {
            return;
        }
        let images = self.detail_images();
        if index >= images.len() {
            return;
        }
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if detail.carousel.select_or_preview(index) == DetailClick::Preview {
            self.preview = Some(images[index].clone());
        }
    }

    pub fn swipe_detail(&mut self, direction: SwipeDirection) {
        if self.frozen() {
            return;
        }
        let len = self.detail_images().len();
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        match direction {
            SwipeDirection::Next => detail.carousel.rotate_next(len),
            SwipeDirection::Prev => detail.carousel.rotate_prev(len),
        }
    }

    /// Dismissing the overlay never disturbs carousel indices.
    pub fn dismiss_preview(&mut self) {
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CANONICAL_START;
    use crate::fleet::{vessel_from_row, VesselRow};

    fn vessel(id: i64, price_range: &str, cabin: &[&str], deck: &[&str]) -> Vessel {
        let images = format!(
            r#"{{"cabin":{},"deck":{}}}"#,
            serde_json::to_string(cabin).unwrap(),
            serde_json::to_string(deck).unwrap(),
        );
        vessel_from_row(
            VesselRow {
                id,
                name: format!("Boat {}", id),
                slug: format!("boat-{}", id),
                price_range: price_range.to_string(),
                images: Some(images),
                ..Default::default()
            },
            "https://assets.example.com",
        )
    }

    fn loaded_scene() -> HeroScene {
        let mut scene = HeroScene::new(WindowSize::Three);
        scene.vessels_loaded(vec![
            vessel(1, "<1000", &["c1", "c2", "c3", "c4", "c5"], &["d1", "d2", "d3", "d4"]),
            vessel(2, "<1000", &["c1"], &[]),
            vessel(3, "1000-1500", &[], &[]),
        ]);
        scene
    }

    #[test]
    fn load_derives_tiers_and_resets_primary() {
        let scene = loaded_scene();
        assert_eq!(scene.view(), SceneView::Browsing);
        assert_eq!(scene.tiers, vec!["<1000", "1000-1500"]);
        assert_eq!(scene.active_tier.as_deref(), Some("<1000"));
        assert_eq!(scene.primary.active_index, CANONICAL_START);
        assert_eq!(scene.filtered_vessels().len(), 2);
    }

    #[test]
    fn filter_change_resets_active_index() {
        let mut scene = loaded_scene();
        scene.click_vessel(0);
        assert_eq!(scene.primary.active_index, 0);

        scene.set_price_filter("1000-1500");
        assert_eq!(scene.primary.active_index, CANONICAL_START);
        assert_eq!(scene.filtered_vessels().len(), 1);
    }

    #[test]
    fn reload_keeps_surviving_tier() {
        let mut scene = loaded_scene();
        scene.set_price_filter("1000-1500");
        scene.vessels_loaded(vec![
            vessel(1, "<1000", &[], &[]),
            vessel(3, "1000-1500", &[], &[]),
        ]);
        assert_eq!(scene.active_tier.as_deref(), Some("1000-1500"));

        // A vanished tier falls back to the first ordered one.
        scene.vessels_loaded(vec![vessel(1, "<1000", &[], &[])]);
        assert_eq!(scene.active_tier.as_deref(), Some("<1000"));
    }

    #[test]
    fn failed_load_renders_error_state() {
        let mut scene = HeroScene::new(WindowSize::Three);
        scene.load_failed("catalog unreachable".to_string());
        assert_eq!(scene.view(), SceneView::Failed);
        assert!(scene.filtered_vessels().is_empty());
    }

    #[test]
    fn empty_fleet_is_explicit() {
        let mut scene = HeroScene::new(WindowSize::Three);
        scene.vessels_loaded(Vec::new());
        assert_eq!(scene.view(), SceneView::EmptyFleet);
        assert!(scene.tiers.is_empty());
    }

    #[test]
    fn detail_opens_on_cabin_centered_and_closes_back() {
        let mut scene = loaded_scene();
        scene.show_details(0);
        assert_eq!(scene.view(), SceneView::Detail);

        let detail = scene.detail.as_ref().unwrap();
        assert_eq!(detail.carousel.category, DetailCategory::Cabin);
        assert_eq!(detail.carousel.active_index, 2); // 5 cabin images

        // Primary selection is untouched by opening detail.
        assert_eq!(scene.primary.active_index, CANONICAL_START);

        scene.switch_category(DetailCategory::Deck);
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 2); // 4 deck images

        scene.close_details();
        assert_eq!(scene.view(), SceneView::Browsing);

        // Reopening starts back on Cabin.
        scene.show_details(0);
        let detail = scene.detail.as_ref().unwrap();
        assert_eq!(detail.carousel.category, DetailCategory::Cabin);
    }

    #[test]
    fn centered_detail_click_opens_preview_and_freezes() {
        let mut scene = loaded_scene();
        scene.show_details(0);

        // Non-centered click rotates, no overlay.
        scene.click_detail_image(0);
        assert!(scene.preview.is_none());
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 0);

        // Centered click opens the overlay, index untouched.
        scene.click_detail_image(0);
        assert_eq!(scene.view(), SceneView::Previewing);
        assert!(scene.preview.as_deref().unwrap().ends_with("c1"));
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 0);

        // Interactions are frozen under the overlay.
        scene.click_detail_image(1);
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 0);

        // Dismissing restores detail with indices intact.
        scene.dismiss_preview();
        assert_eq!(scene.view(), SceneView::Detail);
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 0);
    }

    #[test]
    fn empty_bucket_centers_at_zero() {
        let mut scene = loaded_scene();
        scene.show_details(0);
        scene.switch_category(DetailCategory::Yacht); // no yacht images
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 0);
        assert!(scene.detail_images().is_empty());
    }

    #[test]
    fn swipes_rotate_one_step() {
        let mut scene = loaded_scene();
        scene.swipe_vessels(SwipeDirection::Next);
        assert_eq!(scene.primary.active_index, 0); // len 2, wrapped from 1

        scene.show_details(0);
        scene.swipe_detail(SwipeDirection::Prev);
        assert_eq!(scene.detail.as_ref().unwrap().carousel.active_index, 1);
    }
}
