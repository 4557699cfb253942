//! UI module for rendering the TUI

mod components;
mod form;
mod layout;

use crate::api::BallotApi;
use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw<C: BallotApi>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let (header_area, form_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    form::draw(frame, form_area, app);
    layout::draw_status_bar(frame, status_area);

    // Notice dialog overlays everything
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
