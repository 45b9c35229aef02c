//! Line classifier for the Wavefront OBJ subset used by [`Mesh`](crate::Mesh).
//!
//! Each line is turned into an [`ObjRecord`] on its own, with no knowledge
//! of the rest of the file. Index validation against the loaded sequences
//! happens later, in the mesh.
//!
//! Recognised lines:
//!
//! ```text
//! v  x y z        vertex position (extra components ignored)
//! vt u v          texture coordinate (extra components ignored)
//! vn x y z        vertex normal
//! f  a/b/c ...    face; corners are v, v/vt, v//vn or v/vt/vn, 1-based
//! ```
//!
//! Everything else, including comments and blank lines, is
//! [`ObjRecord::Unknown`].

use thiserror::Error;

use crate::math::{Vec2f, Vec3f};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("`{keyword}` needs {expected} components, found {found}")]
    MissingComponents {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid number `{token}`")]
    InvalidNumber { token: String },
    #[error("invalid face corner `{token}`")]
    InvalidCorner { token: String },
    #[error("face needs at least 3 corners, found {found}")]
    TooFewCorners { found: usize },
    #[error("face corners disagree on which attributes they carry")]
    MixedCorners,
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// One corner of a face, with 0-based indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceCorner {
    pub vertex: usize,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

impl FaceCorner {
    fn layout(&self) -> (bool, bool) {
        (self.texcoord.is_some(), self.normal.is_some())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjRecord {
    Vertex(Vec3f),
    TexCoord(Vec2f),
    Normal(Vec3f),
    Face(Vec<FaceCorner>),
    Unknown,
}

/// Classify and parse a single line.
pub fn parse_line(line: &str) -> Result<ObjRecord, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(ObjRecord::Unknown);
    };
    let rest: Vec<&str> = tokens.collect();

    match keyword {
        "v" => {
            let [x, y, z] = parse_floats::<3>("v", &rest)?;
            Ok(ObjRecord::Vertex(Vec3f::new(x, y, z)))
        }
        "vt" => {
            let [u, v] = parse_floats::<2>("vt", &rest)?;
            Ok(ObjRecord::TexCoord(Vec2f::new(u, v)))
        }
        "vn" => {
            let [x, y, z] = parse_floats::<3>("vn", &rest)?;
            Ok(ObjRecord::Normal(Vec3f::new(x, y, z)))
        }
        "f" => parse_face(&rest).map(ObjRecord::Face),
        _ => Ok(ObjRecord::Unknown),
    }
}

fn parse_floats<const N: usize>(
    keyword: &'static str,
    tokens: &[&str],
) -> Result<[f32; N], ParseError> {
    if tokens.len() < N {
        return Err(ParseError::MissingComponents {
            keyword,
            expected: N,
            found: tokens.len(),
        });
    }

    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

fn parse_face(tokens: &[&str]) -> Result<Vec<FaceCorner>, ParseError> {
    if tokens.len() < 3 {
        return Err(ParseError::TooFewCorners {
            found: tokens.len(),
        });
    }

    let corners = tokens
        .iter()
        .map(|token| parse_corner(token))
        .collect::<Result<Vec<_>, _>>()?;

    let layout = corners[0].layout();
    if corners.iter().any(|c| c.layout() != layout) {
        return Err(ParseError::MixedCorners);
    }
    Ok(corners)
}

fn parse_corner(token: &str) -> Result<FaceCorner, ParseError> {
    let invalid = || ParseError::InvalidCorner {
        token: token.to_string(),
    };

    // OBJ indices are 1-based; 0 and relative (negative) indices are rejected.
    let index = |field: &str| -> Result<usize, ParseError> {
        match field.parse::<usize>() {
            Ok(i) if i > 0 => Ok(i - 1),
            _ => Err(invalid()),
        }
    };
    let optional = |field: Option<&str>| -> Result<Option<usize>, ParseError> {
        match field {
            None | Some("") => Ok(None),
            Some(f) => index(f).map(Some),
        }
    };

    let mut fields = token.split('/');
    let vertex = index(fields.next().unwrap_or_default())?;
    let texcoord = optional(fields.next())?;
    let normal = optional(fields.next())?;
    if fields.next().is_some() {
        return Err(invalid());
    }

    Ok(FaceCorner {
        vertex,
        texcoord,
        normal,
    })
}
