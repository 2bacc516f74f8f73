pub fn is_valid_display_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_valid_category(category: &str) -> bool {
    !category.trim().is_empty()
}

pub fn is_valid_radius_km(radius_km: f64) -> bool {
    radius_km.is_finite() && radius_km > 0.0
}
