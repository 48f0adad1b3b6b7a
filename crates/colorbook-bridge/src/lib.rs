// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colorbook — collaborator abstractions.
//
// The line-art core never talks to the outside world itself. These traits
// describe the three services around it (where source images come from,
// where finished pages are kept, and who the current owner is) together with
// local implementations usable from the CLI and in tests.

pub mod gallery;
pub mod identity;
pub mod source;
pub mod traits;

pub use gallery::MemoryGallery;
pub use identity::StaticIdentity;
pub use source::{FileImageSource, UnavailableSource};
pub use traits::{GalleryStore, IdentityProvider, ImageSource};
