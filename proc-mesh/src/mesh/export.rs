//! Wavefront OBJ serialization

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::Mesh;

/// Errors from writing a mesh to disk
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem write failed
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Write a mesh as a Wavefront OBJ file.
///
/// The file carries a comment header with `name` and the vertex/face counts,
/// then `v` lines with six-decimal coordinates and `f` lines with 1-based
/// indices. Only positions and faces are emitted; no normals, UVs or
/// materials. Output streams through a buffered writer.
pub fn write_obj(mesh: &Mesh, path: &Path, name: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_lines(mesh, &mut out, name)
        .and_then(|()| out.flush())
        .map_err(io_err)?;

    debug!(
        name,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote {}",
        path.display()
    );

    Ok(())
}

fn write_lines(mesh: &Mesh, out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "# {name}")?;
    writeln!(out, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(out, "# Faces: {}", mesh.face_count())?;
    writeln!(out)?;

    for [x, y, z] in &mesh.vertices {
        writeln!(out, "v {x:.6} {y:.6} {z:.6}")?;
    }
    writeln!(out)?;

    for [a, b, c] in &mesh.faces {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;
    use std::fs;

    fn parse_obj(text: &str) -> (Vec<[f32; 3]>, Vec<[u32; 3]>) {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for line in text.lines() {
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let mut p = parts.map(|s| s.parse::<f32>().unwrap());
                    vertices.push([p.next().unwrap(), p.next().unwrap(), p.next().unwrap()]);
                }
                Some("f") => {
                    let mut p = parts.map(|s| s.parse::<u32>().unwrap() - 1);
                    faces.push([p.next().unwrap(), p.next().unwrap(), p.next().unwrap()]);
                }
                _ => {}
            }
        }
        (vertices, faces)
    }

    #[test]
    fn test_write_obj_round_trip() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(vec3(0.0, 0.0, 0.0));
        mesh.add_vertex(vec3(1.0, 0.0, 0.0));
        mesh.add_vertex(vec3(0.0, 1.0, -0.5));
        mesh.add_face(0, 1, 2);

        let dir = std::env::temp_dir();
        let path = dir.join("proc_mesh_export_test.obj");
        write_obj(&mesh, &path, "tri").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# tri\n# Vertices: 3\n# Faces: 1\n"));

        let (vertices, faces) = parse_obj(&text);
        assert_eq!(vertices, mesh.vertices);
        assert_eq!(faces, mesh.faces);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_obj_streams_large_mesh() {
        // Well past one BufWriter buffer's worth of lines.
        let mesh = crate::mesh::primitives::generate_sphere(vec3(0.0, 0.0, 0.0), 1.0, 64, 64);

        let path = std::env::temp_dir().join("proc_mesh_export_large_test.obj");
        write_obj(&mesh, &path, "ball").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let (vertices, faces) = parse_obj(&text);
        assert_eq!(vertices.len(), mesh.vertex_count());
        assert_eq!(faces, mesh.faces);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_obj_bad_path() {
        let mesh = Mesh::new();
        let path = Path::new("/nonexistent-dir/mesh.obj");
        let err = write_obj(&mesh, path, "empty").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/mesh.obj"));
    }
}
