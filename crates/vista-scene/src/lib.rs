// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Vista Scene
//!
//! Scene composition on top of `vista-core`: the [`Renderable`] capability
//! trait, the shared [`PropHandle`], concrete [`Mesh`] actors, the composite
//! [`Assembly`] node and the [`Scene`] that registers them.
//!
//! Everything here is single-threaded: handles are `Rc<RefCell<_>>` and are
//! meant to be built up on one thread before being handed to a renderer.

#![warn(missing_docs)]

pub mod assembly;
pub mod error;
pub mod input;
pub mod mesh;
pub mod prop;
pub mod scene;
pub mod settings;

pub use assembly::{Assembly, Selector, Unpacked};
pub use error::SceneError;
pub use input::PropInput;
pub use mesh::Mesh;
pub use prop::{AsAny, Extents, PropHandle, Renderable};
pub use scene::{Leaf, Scene};
pub use settings::SceneSettings;
