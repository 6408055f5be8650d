use std::cmp;
use std::ffi;

use gl;
use gl::types::*;

use crate::errors::*;

use super::errors::Error;

/// Describes the OpenGL context profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Profile {
    /// The context uses only future-compatible functions and definitions.
    Core,
    /// The context includes all immediate mode functions and definitions.
    Compatibility,
}

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses the string returned by `glGetString(GL_VERSION)`, e.g. `"4.6.0 NVIDIA 410.93"`
    /// or `"OpenGL ES 3.2 Mesa 18.0.5"`.
    pub fn parse(desc: &str) -> Result<Version> {
        let (es, desc) = if desc.starts_with("OpenGL ES-") {
            // "OpenGL ES-CM 1.1" and friends.
            (true, desc[10..].splitn(2, ' ').nth(1).unwrap_or(""))
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let desc = desc
            .split(' ')
            .next()
            .ok_or_else(|| format_err!("[GL] Version string '{}' is unformaled.", desc))?;

        let mut iter = desc.split('.');
        let mut number = || -> Result<u8> {
            let v = iter
                .next()
                .ok_or_else(|| format_err!("[GL] Version string '{}' is unformaled.", desc))?;
            v.parse()
                .map_err(|_| format_err!("[GL] Version string '{}' is unformaled.", desc))
        };

        let major = number()?;
        let minor = number()?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }

    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn current() -> Result<Version> {
        Version::parse(&parse_str(gl::VERSION)?)
    }
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The OpenGL context profile if available.
    ///
    /// The context profile is available from OpenGL 3.2 onwards. `None` if not supported.
    pub profile: Option<Profile>,

    /// Maximum number of textures that can be bound to a program.
    ///
    /// `glActiveTexture` must be between `GL_TEXTURE0` and `GL_TEXTURE0` + this value - 1.
    pub max_combined_texture_image_units: u32,

    /// Maximum number of color attachment bind points.
    pub max_color_attachments: u32,
}

impl Capabilities {
    /// # Unsafe
    ///
    /// The GL context must be current in this thread.
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::current()?;

        Ok(Capabilities {
            version,
            vendor: parse_str(gl::VENDOR)?,
            renderer: parse_str(gl::RENDERER)?,
            profile: parse_profile(version),
            max_combined_texture_image_units: parse_integer(
                gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS,
                16,
            ),
            max_color_attachments: parse_integer(gl::MAX_COLOR_ATTACHMENTS, 4),
        })
    }
}

/// Checks that the context is able to run the demos, which need at least a
/// OpenGL 3.3 or OpenGL ES 3.0 implementation.
pub fn check_capabilities(caps: &Capabilities) -> Result<()> {
    // GL and ES versions are not comparable with each other.
    let too_old = match caps.version {
        Version::GL(major, minor) if caps.version < Version::GL(3, 3) => {
            Some(format!("OpenGL 3.3 (found {}.{})", major, minor))
        }
        Version::ES(major, minor) if caps.version < Version::ES(3, 0) => {
            Some(format!("OpenGL ES 3.0 (found ES {}.{})", major, minor))
        }
        _ => None,
    };

    if let Some(v) = too_old {
        return Err(Error::Requirement(v).into());
    }

    if caps.max_color_attachments < 3 {
        return Err(Error::Requirement("three color attachments".to_owned()).into());
    }

    Ok(())
}

unsafe fn parse_str(id: GLenum) -> Result<String> {
    let s = gl::GetString(id);
    if s.is_null() {
        bail!("[GL] String of {} is null.", id);
    }

    String::from_utf8(ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec())
        .map_err(|_| format_err!("[GL] String of {} is unformaled.", id))
}

unsafe fn parse_integer(id: GLenum, fallback: GLint) -> u32 {
    let mut val = fallback;
    gl::GetIntegerv(id, &mut val);
    val as u32
}

unsafe fn parse_profile(version: Version) -> Option<Profile> {
    if version >= Version::GL(3, 2) {
        let mut val = 0;
        gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut val);
        let val = val as GLenum;
        if (val & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT) != 0 {
            Some(Profile::Compatibility)
        } else if (val & gl::CONTEXT_CORE_PROFILE_BIT) != 0 {
            Some(Profile::Core)
        } else {
            None
        }
    } else {
        None
    }
}
