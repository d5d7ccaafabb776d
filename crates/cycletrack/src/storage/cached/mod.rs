mod cycles;

pub use cycles::CachedCycleRepository;
