/// A workload a host dispatcher can hand decrypted work order input to.
///
/// Implementations never fail outward: every input yields a message.
pub trait IWorkload: Send + Sync {
    /// Identifier the workload is registered under.
    fn workload_id(&self) -> &str;

    /// Process one decrypted work order line and return the result text.
    fn execute_work_order(&self, input: &str) -> String;
}
