/// Activation applied element-wise to a dense layer's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActFn {
    Sigmoid { amp: f32 },
    Relu,
}
use ActFn::*;

impl ActFn {
    pub fn sigmoid(amp: f32) -> Self {
        Sigmoid { amp }
    }

    pub fn relu() -> Self {
        Relu
    }

    pub fn f(&self, z: f32) -> f32 {
        match self {
            Sigmoid { amp } => amp / (1. + (-z).exp()),
            Relu => z.max(0.),
        }
    }
}
