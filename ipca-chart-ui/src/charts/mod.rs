//! Chart components: thin adapters reconciling `ipca-viz` scenes into SVG.
//!
//! Each component reads the shared state, rebuilds its scene, and emits
//! the scene's marks as SVG elements with pointer handlers. All layout
//! decisions live in the scene builders; nothing here computes geometry.

mod axis;
mod bar_chart;
mod line_chart;
mod map_chart;
mod sunburst_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
pub use map_chart::MapChart;
pub use sunburst_chart::SunburstChart;
