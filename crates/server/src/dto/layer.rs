use bikeflow::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LayerDto {
    pub id: String,
    pub paint: LinePaint,
}

impl LayerDto {
    pub fn from(layer: &LineLayer) -> Self {
        Self {
            id: layer.id.clone(),
            paint: layer.paint.clone(),
        }
    }
}
