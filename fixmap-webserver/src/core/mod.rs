pub use fixmap_core::{db, repositories, usecases};

pub mod entities {
    pub use fixmap_core::entities::*;
}

pub mod prelude {

    use std::result;

    pub use fixmap_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};

    pub type Result<T> = result::Result<T, fixmap_application::error::AppError>;
}
