//! Built-in wallpaper catalog and rotation policy.

/// Seconds between automatic wallpaper changes.
pub const WALLPAPER_ROTATION_SECS: u64 = 10;

const WALLPAPER_CATALOG: [&str; 5] = [
    "https://images.pexels.com/photos/1205301/pexels-photo-1205301.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop",
    "https://images.pexels.com/photos/956981/milky-way-starry-sky-night-sky-star-956981.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop",
    "https://images.pexels.com/photos/417074/pexels-photo-417074.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop",
    "https://images.pexels.com/photos/1287145/pexels-photo-1287145.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop",
    "https://images.pexels.com/photos/1906658/pexels-photo-1906658.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop",
];

/// Number of built-in wallpapers.
pub fn catalog_len() -> usize {
    WALLPAPER_CATALOG.len()
}

/// All built-in wallpaper URLs in catalog order.
pub fn catalog() -> &'static [&'static str] {
    &WALLPAPER_CATALOG
}

/// URL for the wallpaper at `index`, wrapping out-of-range indices.
pub fn wallpaper_url(index: usize) -> &'static str {
    WALLPAPER_CATALOG[index % WALLPAPER_CATALOG.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_indices_wrap() {
        assert_eq!(wallpaper_url(0), wallpaper_url(catalog_len()));
        assert_eq!(wallpaper_url(1), wallpaper_url(catalog_len() + 1));
    }
}
