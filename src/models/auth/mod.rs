pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::SessionUser;
pub use requests::LoginForm;
