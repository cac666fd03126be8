use super::types::Species;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub species: Species,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(species: Species, position: [f64; 3]) -> Self {
        Self { species, position }
    }

    #[inline]
    pub fn distance_squared(&self, other: &Atom) -> f64 {
        let dx = self.position[0] - other.position[0];
        let dy = self.position[1] - other.position[1];
        let dz = self.position[2] - other.position[2];
        dx * dx + dy * dy + dz * dz
    }
}
