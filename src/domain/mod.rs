// Domain layer: request/response models shared by the gateway and its tests.

pub mod model;
