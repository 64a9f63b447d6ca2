use service::cafe::CafeService;

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub cafes: CafeService,
}
