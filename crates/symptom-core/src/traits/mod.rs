mod workload;

pub use workload::IWorkload;
