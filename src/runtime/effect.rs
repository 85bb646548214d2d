#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RequestRender,
    Exit,
}
