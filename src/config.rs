/// Configuration for the rendering pipeline.
///
/// Paints are CSS colour strings passed through to the surface untouched.
/// Lengths are in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub background: String,
    pub vertex_color: String,
    pub edge_color: String,
    /// Radius of the ring the vertices sit on.
    pub big_radius: f64,
    pub vertex_radius: f64,
    pub edge_thickness: f64,
    pub arrow_size: f64,
    /// Curvature added per bend step of parallel edges and loops.
    pub bendiness: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            vertex_color: "black".to_string(),
            edge_color: "black".to_string(),
            big_radius: 100.0,
            vertex_radius: 5.0,
            edge_thickness: 1.5,
            arrow_size: 8.0,
            bendiness: 10.0,
        }
    }
}

impl RenderSettings {
    pub fn new() -> Self {
        Self::default()
    }
}
