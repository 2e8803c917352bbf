use std::error;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::spatial::{Point, PointSet};

mod pts;

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, FileError> {
    let ext = path
        .as_ref()
        .extension()
        .map_or(Err(FileError::NoExt), Ok)?;
    let ext = ext.to_str().ok_or(FileError::NonUniPath)?.to_string();

    let file = fs::read_to_string(path).or(Err(FileError::NoOpen))?;

    match ext.as_str() {
        "pts" => pts::pts_to_points(&file),
        _ => Err(FileError::BadType(ext)),
    }
}

pub fn save_points<P: AsRef<Path>>(path: P, set: &PointSet) -> Result<(), FileError> {
    let serialized = pts::points_to_pts(set.iter());

    fs::write(path, serialized).or(Err(FileError::NoOpen))
}

#[derive(Debug, Clone)]
pub enum FileError {
    NoExt,
    NoOpen,
    NonUniPath,
    BadParse(String),
    BadType(String),
}

impl error::Error for FileError {}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FileError: ")?;
        match self.clone() {
            FileError::NoExt => {
                write!(f, "cannot read file extension")
            }
            FileError::NoOpen => {
                write!(f, "cannot open file")
            }
            FileError::NonUniPath => {
                write!(f, "non-unicode path")
            }
            FileError::BadType(s) => {
                write!(f, "unsupported file type: {}", s)
            }
            FileError::BadParse(s) => {
                write!(f, "bad parse: {}", s)
            }
        }
    }
}

impl FileError {
    pub fn parse<T: ToString>(msg: T) -> Self {
        Self::BadParse(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::FileError;
    use crate::spatial::{Point, PointSet};

    #[test]
    fn load_square() {
        let points = super::read_points("example_files/square.pts").unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[4], Point::new(100.0, 100.0));
    }

    #[test]
    fn round_trip() {
        let mut set = PointSet::new();
        set.push(Point::new(1.5, 2.0)).unwrap();
        set.push(Point::new(-3.0, 0.25)).unwrap();

        super::save_points("test_generated/round_trip.pts", &set).unwrap();
        let points = super::read_points("test_generated/round_trip.pts").unwrap();
        assert_eq!(points, vec![Point::new(1.5, 2.0), Point::new(-3.0, 0.25)]);
    }

    #[test]
    fn unreadable_paths() {
        assert!(matches!(
            super::read_points("example_files/missing.pts"),
            Err(FileError::NoOpen)
        ));
        assert!(matches!(
            super::read_points("example_files"),
            Err(FileError::NoExt)
        ));
    }

    #[test]
    fn bad_literal() {
        assert!(super::pts::pts_to_points("1.0 2.0\nnot a point\n").is_err());
    }
}
