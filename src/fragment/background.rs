//! Menu background panel: fullscreen art and logo, menu mode only.

use std::rc::Rc;

use crate::engine::{Color, Rect, Renderer, SceneRoot, Session, Viewport};
use crate::error::Result;
use crate::fragment::Fragment;

const BACKGROUND_REGION: &str = "background";
const LOGO_REGION: &str = "logotext";

/// Background art opacity.
const BACK_ALPHA: f32 = 0.7;
/// Fixed art offset from the viewport center, in pixels.
const BACK_OFFSET_X: f32 = 240.0;
const BACK_OFFSET_Y: f32 = 250.0;

/// Draws a background texture scaled to at least fill the viewport and a
/// logo anchored near the top. Pure function of the viewport; no state.
pub struct BackgroundMenuPanel {
    session: Rc<dyn Session>,
}

impl BackgroundMenuPanel {
    pub fn new(session: Rc<dyn Session>) -> Self {
        Self { session }
    }
}

impl Fragment for BackgroundMenuPanel {
    fn attach_to(&mut self, scene: &mut dyn SceneRoot) {
        scene.add("background");
    }

    fn visible(&self) -> bool {
        self.session.in_menu()
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, viewport: Viewport) -> Result<()> {
        if !self.visible() {
            return Ok(());
        }

        let back = renderer.region(BACKGROUND_REGION)?;
        let scale = (viewport.width / back.width * 1.5).max(viewport.dp(5.0));
        let (w, h) = (back.width * scale, back.height * scale);
        renderer.draw_region(
            &back,
            Rect::new(
                viewport.width / 2.0 - w / 2.0 + BACK_OFFSET_X,
                viewport.height / 2.0 - h / 2.0 - BACK_OFFSET_Y,
                w,
                h,
            ),
            Color::WHITE.with_alpha(BACK_ALPHA),
        );

        let portrait = viewport.portrait();
        let logo = renderer.region(LOGO_REGION)?;
        let logo_scale = viewport.dp(7.0).floor() * if portrait { 5.0 / 7.0 } else { 1.0 };
        let (lw, lh) = (logo.width * logo_scale, logo.height * logo_scale);
        // anchored slightly above the top edge; pushed down on portrait
        let y = -15.0 + if portrait { viewport.dp(30.0) } else { 0.0 };
        renderer.draw_region(
            &logo,
            Rect::new(viewport.width / 2.0 - lw / 2.0, y, lw, lh),
            Color::WHITE,
        );

        Ok(())
    }
}
