pub use crate::application::{self, Application, FrameContext, Settings};
pub use crate::assets::{self, Model, ModelData, TextureData};
pub use crate::errors::*;
pub use crate::input::prelude::*;
pub use crate::math::{self, Color};
pub use crate::video::{self, prelude::*};
pub use crate::window::prelude::*;
