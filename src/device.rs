use crate::config::DeviceConfig;

/// The demo is desktop-only; narrow viewports get a blocking screen instead.
pub fn is_mobile_viewport(width_px: f64, cfg: &DeviceConfig) -> bool {
    width_px <= f64::from(cfg.mobile_max_width_px)
}
