use ambient_core::css_to_backing;
use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let offset = pointer_client_px(ev) - Vec2::new(rect.left() as f32, rect.top() as f32);
    css_to_backing(
        offset,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
