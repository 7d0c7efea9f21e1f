//! Per-analysis configuration
//!
//! The four scenario analyses (overturning streamfunction, sea-surface
//! density, vertical density section, ventilation age) share one pipeline;
//! only the variable, units, palette, axis labels, and figure naming
//! differ. Each preset below captures one analysis.

use serde::{Deserialize, Serialize};

use crate::plot::Colormap;

/// Configuration for one analysis variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Dataset variable name
    pub variable: String,
    /// Quantity label used on colorbars and value axes, e.g. "psi (Sv)"
    pub quantity: String,
    pub x_label: String,
    pub y_label: String,
    pub colormap: Colormap,
    /// Depth sections are drawn with the y axis growing downward
    pub invert_y: bool,
    /// Stem for figure file names; suffixes a-f select the panel
    pub figure_stem: String,
}

impl AnalysisSpec {
    /// Meridional overturning streamfunction (depth x latitude, Sv)
    pub fn overturning() -> Self {
        Self {
            variable: "phys_opsi".to_string(),
            quantity: "psi (Sv)".to_string(),
            x_label: "Latitude [degN]".to_string(),
            y_label: "Depth [m]".to_string(),
            colormap: Colormap::Balance,
            invert_y: true,
            figure_stem: "fig3".to_string(),
        }
    }

    /// Sea-surface density (latitude x longitude, kg/m3)
    pub fn surface_density() -> Self {
        Self {
            variable: "phys_ocn_rho".to_string(),
            quantity: "rho (kg/m3)".to_string(),
            x_label: "Longitude [degE]".to_string(),
            y_label: "Latitude [degN]".to_string(),
            colormap: Colormap::Algae,
            invert_y: false,
            figure_stem: "fig1".to_string(),
        }
    }

    /// Zonal-mean vertical density section (depth x latitude, kg/m3)
    pub fn vertical_density() -> Self {
        Self {
            variable: "phys_ocn_rho".to_string(),
            quantity: "rho (kg/m3)".to_string(),
            x_label: "Latitude [degN]".to_string(),
            y_label: "Depth [m]".to_string(),
            colormap: Colormap::Haline,
            invert_y: true,
            figure_stem: "fig2".to_string(),
        }
    }

    /// Zonal-mean ventilation age section (depth x latitude, years)
    pub fn ventilation_age() -> Self {
        Self {
            variable: "misc_col_Dage".to_string(),
            quantity: "Ventilation age (years)".to_string(),
            x_label: "Latitude [degN]".to_string(),
            y_label: "Depth [m]".to_string(),
            colormap: Colormap::Dense,
            invert_y: true,
            figure_stem: "fig4".to_string(),
        }
    }

    /// File name for one figure panel, e.g. stem "fig3" + 'a' -> "fig3a.png"
    pub fn figure_name(&self, panel: char) -> String {
        format!("{}{}.png", self.figure_stem, panel)
    }
}
