//! Read-only triangle mesh loaded from OBJ text.
//!
//! A [`Mesh`] owns vertex positions, texture coordinates, vertex normals and
//! the per-face index triples into each of them. Every index is checked at
//! construction, so the accessors never see an out-of-range face.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{Vec2f, Vec3f};
use crate::obj::{self, FaceCorner, ObjRecord, ParseError};

/// How the loader treats a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Abort on the first malformed line.
    #[default]
    Strict,
    /// Log a warning and skip the line.
    Lenient,
}

/// Which per-vertex attribute a face index points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Position => write!(f, "vertex"),
            Attribute::TexCoord => write!(f, "texture coordinate"),
            Attribute::Normal => write!(f, "normal"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open `{}`: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("face {face} references {attribute} {index}, but only {len} are loaded")]
    IndexOutOfRange {
        face: usize,
        attribute: Attribute,
        index: usize,
        len: usize,
    },
}

/// A triangle: indices into the mesh's vertex, texture coordinate and
/// normal sequences. 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub texcoords: Option<[usize; 3]>,
    pub normals: Option<[usize; 3]>,
}

impl Face {
    fn from_corners(corners: [FaceCorner; 3]) -> Self {
        let texcoords = match corners.map(|c| c.texcoord) {
            [Some(a), Some(b), Some(c)] => Some([a, b, c]),
            _ => None,
        };
        let normals = match corners.map(|c| c.normal) {
            [Some(a), Some(b), Some(c)] => Some([a, b, c]),
            _ => None,
        };
        Self {
            vertices: corners.map(|c| c.vertex),
            texcoords,
            normals,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3f>,
    texcoords: Vec<Vec2f>,
    normals: Vec<Vec3f>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, validating every face index.
    pub fn new(
        vertices: Vec<Vec3f>,
        texcoords: Vec<Vec2f>,
        normals: Vec<Vec3f>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        let mesh = Self {
            vertices,
            texcoords,
            normals,
            faces,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Load a mesh from an OBJ file.
    pub fn from_obj<P: AsRef<Path>>(path: P, strictness: Strictness) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::from_reader(BufReader::new(file), strictness)?;

        info!(
            "loaded {}: {} vertices, {} texcoords, {} normals, {} faces",
            path.display(),
            mesh.vertex_count(),
            mesh.texcoord_count(),
            mesh.normal_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    /// Parse OBJ text line by line.
    ///
    /// Each `f` line becomes exactly one face. Polygons with more than three
    /// corners keep their first three and log a warning.
    pub fn from_reader<R: BufRead>(mut reader: R, strictness: Strictness) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        let mut texcoords = Vec::new();
        let mut normals = Vec::new();
        let mut faces = Vec::new();

        let mut buf = Vec::new();
        let mut number = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            let parsed = std::str::from_utf8(&buf)
                .map_err(|_| ParseError::InvalidUtf8)
                .and_then(obj::parse_line);
            let record = match parsed {
                Ok(record) => record,
                Err(source) => match strictness {
                    Strictness::Strict => {
                        return Err(LoadError::Parse {
                            line: number,
                            source,
                        })
                    }
                    Strictness::Lenient => {
                        warn!("skipping line {number}: {source}");
                        continue;
                    }
                },
            };

            match record {
                ObjRecord::Vertex(v) => vertices.push(v),
                ObjRecord::TexCoord(vt) => texcoords.push(vt),
                ObjRecord::Normal(vn) => normals.push(vn),
                ObjRecord::Face(corners) => {
                    if corners.len() > 3 {
                        warn!(
                            "line {number}: face has {} corners, keeping the first 3",
                            corners.len()
                        );
                    }
                    faces.push(Face::from_corners([corners[0], corners[1], corners[2]]));
                }
                ObjRecord::Unknown => {}
            }
        }

        Self::new(vertices, texcoords, normals, faces)
    }

    fn validate(&self) -> Result<(), LoadError> {
        let check = |face: usize, attribute: Attribute, indices: &[usize; 3], len: usize| {
            match indices.iter().find(|&&index| index >= len) {
                Some(&index) => Err(LoadError::IndexOutOfRange {
                    face,
                    attribute,
                    index,
                    len,
                }),
                None => Ok(()),
            }
        };

        for (i, face) in self.faces.iter().enumerate() {
            check(i, Attribute::Position, &face.vertices, self.vertices.len())?;
            if let Some(t) = &face.texcoords {
                check(i, Attribute::TexCoord, t, self.texcoords.len())?;
            }
            if let Some(n) = &face.normals {
                check(i, Attribute::Normal, n, self.normals.len())?;
            }
        }
        Ok(())
    }

    // ============ Counts ============

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // ============ Element access ============
    //
    // Indices come from `face()`/`faces()` and are in range by construction;
    // an arbitrary out-of-range index panics like slice indexing.

    pub fn vertex(&self, i: usize) -> Vec3f {
        self.vertices[i]
    }

    /// Vertex indices of face `i`.
    pub fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i].vertices
    }

    pub fn texture_coord(&self, i: usize) -> Vec2f {
        self.texcoords[i]
    }

    /// Texture coordinate index of `corner` (0..3) of `face`, if the face has one.
    pub fn texture_index(&self, face: usize, corner: usize) -> Option<usize> {
        self.faces[face].texcoords.map(|t| t[corner])
    }

    pub fn normal(&self, i: usize) -> Vec3f {
        self.normals[i]
    }

    /// Normal index of `corner` (0..3) of `face`, if the face has one.
    pub fn normal_index(&self, face: usize, corner: usize) -> Option<usize> {
        self.faces[face].normals.map(|n| n[corner])
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertices(&self) -> &[Vec3f] {
        &self.vertices
    }
}
