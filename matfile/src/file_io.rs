//! Whole-file save and load operations
//!
//! Each call opens the file, fully reads or writes it, and releases the
//! handle before returning; no state is kept between calls. Saves go
//! through a sibling temporary file that is renamed into place once the
//! payload is fully written, so a failed save never leaves a torn file
//! at the target path.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use matfile_core::{element_count, constants::TMP_EXTENSION};
use matfile_core::{DataType, Element, FormatError, FpWidth, MatHeader};

use crate::dense::DenseMatrix;
use crate::dynamic::DynamicMatrix;
use crate::error::{Error, Result};

/// Save a dense matrix, deriving the stored element type from `T`
///
/// Writes the header followed by `rows * cols` elements in row-major
/// order, little-endian, with no padding.
pub fn save_dense<T: Element, P: AsRef<Path>>(matrix: &DenseMatrix<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    // Fail on an invalid shape before anything touches the filesystem
    let header = MatHeader::new(T::data_type(), matrix.rows() as u64, matrix.cols() as u64)?;

    let tmp = tmp_path(path);
    match write_file(&tmp, &header, matrix.as_slice()) {
        Ok(()) => {
            fs::rename(&tmp, path)?;
            Ok(())
        }
        Err(err) => {
            let _ = fs::remove_file(&tmp);
            Err(err)
        }
    }
}

/// Save a matrix with every element explicitly widened to f64
pub fn save_dense_fp64<T: Element, P: AsRef<Path>>(matrix: &DenseMatrix<T>, path: P) -> Result<()> {
    save_dense(&matrix.widen_to_f64(), path)
}

/// Load a dense matrix tagged with its stored element type
///
/// The returned variant holds exactly the type recorded in the header;
/// elements are never promoted or narrowed on load.
pub fn load_dense<P: AsRef<Path>>(path: P) -> Result<DynamicMatrix> {
    let mut file = File::open(path)?;
    let header = read_header(&mut file)?;
    let count = validate_payload(&file, &header)?;
    let mut reader = BufReader::new(file);

    let matrix = match header.data_type {
        DataType::F32 => read_matrix::<f32, _>(&mut reader, &header, count)?.into(),
        DataType::F64 => read_matrix::<f64, _>(&mut reader, &header, count)?.into(),
        DataType::I8 => read_matrix::<i8, _>(&mut reader, &header, count)?.into(),
        DataType::I16 => read_matrix::<i16, _>(&mut reader, &header, count)?.into(),
        DataType::I32 => read_matrix::<i32, _>(&mut reader, &header, count)?.into(),
        DataType::I64 => read_matrix::<i64, _>(&mut reader, &header, count)?.into(),
        DataType::U8 => read_matrix::<u8, _>(&mut reader, &header, count)?.into(),
        DataType::U16 => read_matrix::<u16, _>(&mut reader, &header, count)?.into(),
        DataType::U32 => read_matrix::<u32, _>(&mut reader, &header, count)?.into(),
        DataType::U64 => read_matrix::<u64, _>(&mut reader, &header, count)?.into(),
    };

    Ok(matrix)
}

/// Load a dense matrix whose stored element type must be `T`
///
/// Fails with [`FormatError::TypeMismatch`] when the file was saved with
/// a different element type.
pub fn load_dense_as<T: Element, P: AsRef<Path>>(path: P) -> Result<DenseMatrix<T>> {
    let mut file = File::open(path)?;
    let header = read_header(&mut file)?;
    if header.data_type != T::data_type() {
        return Err(Error::Format(FormatError::TypeMismatch {
            expected: T::data_type(),
            found: header.data_type,
        }));
    }

    let count = validate_payload(&file, &header)?;
    let mut reader = BufReader::new(file);
    read_matrix(&mut reader, &header, count)
}

/// Load a matrix stored with f32 elements
pub fn load_dense_fp32<P: AsRef<Path>>(path: P) -> Result<DenseMatrix<f32>> {
    load_dense_as(path)
}

/// Load a matrix stored with f64 elements
pub fn load_dense_fp64<P: AsRef<Path>>(path: P) -> Result<DenseMatrix<f64>> {
    load_dense_as(path)
}

/// Read the header of a matrix file without touching the payload
pub fn load_header<P: AsRef<Path>>(path: P) -> Result<MatHeader> {
    let mut file = File::open(path)?;
    read_header(&mut file)
}

/// Header-only probe for the stored floating-point width
///
/// Integer files report [`FpWidth::NotFloat`]; the payload is never read
/// and need not be valid.
pub fn fp_width<P: AsRef<Path>>(path: P) -> Result<FpWidth> {
    Ok(load_header(path)?.data_type.float_width())
}

/// Header-only probe for the stored shape
pub fn load_size<P: AsRef<Path>>(path: P) -> Result<(u64, u64)> {
    let header = load_header(path)?;
    Ok((header.rows, header.cols))
}

/// Header-only probe for the stored element type
pub fn load_dtype<P: AsRef<Path>>(path: P) -> Result<DataType> {
    Ok(load_header(path)?.data_type)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(TMP_EXTENSION);
    PathBuf::from(name)
}

fn write_file<T: Element>(path: &Path, header: &MatHeader, data: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&header.to_bytes_array())?;
    if cfg!(target_endian = "little") {
        writer.write_all(bytemuck::cast_slice(data))?;
    } else {
        for value in data {
            writer.write_all(value.to_le_bytes().as_ref())?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn read_header(file: &mut File) -> Result<MatHeader> {
    let mut bytes = [0u8; MatHeader::SIZE];
    file.read_exact(&mut bytes).map_err(map_eof)?;
    Ok(MatHeader::from_bytes(&bytes)?)
}

/// Check the file length against the declared shape and return the
/// element count of the payload
fn validate_payload(file: &File, header: &MatHeader) -> Result<usize> {
    let payload = header.payload_len()?;
    let expected = MatHeader::SIZE as u64 + payload;
    let actual = file.metadata()?.len();
    if actual < expected {
        return Err(Error::Format(FormatError::Truncated));
    }
    if actual > expected {
        return Err(Error::Format(FormatError::SizeMismatch));
    }

    let count = element_count(payload, header.data_type)?;
    usize::try_from(count).map_err(|_| Error::Format(FormatError::InvalidShape))
}

fn read_matrix<T: Element, R: Read>(
    reader: &mut R,
    header: &MatHeader,
    count: usize,
) -> Result<DenseMatrix<T>> {
    let byte_len = count
        .checked_mul(T::size_bytes())
        .ok_or(Error::Format(FormatError::InvalidShape))?;
    let mut bytes = vec![0u8; byte_len];
    reader.read_exact(&mut bytes).map_err(map_eof)?;

    let data = if cfg!(target_endian = "little") {
        bytemuck::pod_collect_to_vec(bytes.as_slice())
    } else {
        let mut data = Vec::with_capacity(count);
        for chunk in bytes.chunks_exact(T::size_bytes()) {
            data.push(T::read_le(chunk).ok_or(Error::Format(FormatError::Truncated))?);
        }
        data
    };

    let rows = usize::try_from(header.rows).map_err(|_| Error::Format(FormatError::InvalidShape))?;
    let cols = usize::try_from(header.cols).map_err(|_| Error::Format(FormatError::InvalidShape))?;
    DenseMatrix::from_vec(data, rows, cols)
}

fn map_eof(err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        Error::Format(FormatError::Truncated)
    } else {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("matfile-io-{}-{name}.matrix", std::process::id()));
        path
    }

    fn roundtrip<T: Element + std::fmt::Debug>(name: &str, rows: usize, cols: usize)
    where
        DenseMatrix<T>: TryFrom<DynamicMatrix, Error = Error>,
    {
        let path = temp_file(name);
        let data: Vec<T> = (0..rows * cols)
            .map(|i| T::from_f64((i % 7) as f64))
            .collect();
        let matrix = DenseMatrix::from_vec(data, rows, cols).unwrap();

        save_dense(&matrix, &path).unwrap();

        let loaded = load_dense(&path).unwrap();
        assert_eq!(loaded.data_type(), T::data_type());
        assert_eq!(loaded.shape(), (rows, cols));

        let typed: DenseMatrix<T> = loaded.try_into().unwrap();
        assert_eq!(typed, matrix);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_roundtrip_all_types() {
        roundtrip::<f32>("rt-f32", 10, 3);
        roundtrip::<f64>("rt-f64", 10, 3);
        roundtrip::<i8>("rt-i8", 10, 3);
        roundtrip::<i16>("rt-i16", 10, 3);
        roundtrip::<i32>("rt-i32", 10, 3);
        roundtrip::<i64>("rt-i64", 10, 3);
        roundtrip::<u8>("rt-u8", 10, 3);
        roundtrip::<u16>("rt-u16", 10, 3);
        roundtrip::<u32>("rt-u32", 10, 3);
        roundtrip::<u64>("rt-u64", 10, 3);
    }

    #[test]
    fn test_roundtrip_empty_shapes() {
        roundtrip::<f64>("rt-empty", 0, 0);
        roundtrip::<u8>("rt-empty-cols", 0, 5);
    }

    #[test]
    fn test_roundtrip_randomized_f64() {
        let path = temp_file("rt-rand");
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let data: Vec<f64> = (0..100 * 17).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let matrix = DenseMatrix::from_vec(data, 100, 17).unwrap();

        save_dense(&matrix, &path).unwrap();
        let loaded = load_dense_fp64(&path).unwrap();
        // Bit-exact reconstruction, not approximate
        assert_eq!(loaded, matrix);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_example_3x2_f64() {
        let path = temp_file("example");
        let matrix =
            DenseMatrix::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();

        save_dense(&matrix, &path).unwrap();

        assert_eq!(fp_width(&path).unwrap(), FpWidth::Fp64);
        assert_eq!(load_size(&path).unwrap(), (3, 2));
        assert_eq!(load_dtype(&path).unwrap(), DataType::F64);

        let loaded = load_dense_fp64(&path).unwrap();
        assert_eq!(loaded, matrix);
        assert_eq!(loaded[(2, 1)], 6.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_fp_width_probe() {
        let path = temp_file("probe");

        let m32 = DenseMatrix::from_vec(vec![1.0_f32; 4], 2, 2).unwrap();
        save_dense(&m32, &path).unwrap();
        assert_eq!(fp_width(&path).unwrap(), FpWidth::Fp32);

        let mi = DenseMatrix::from_vec(vec![1_u32; 4], 2, 2).unwrap();
        save_dense(&mi, &path).unwrap();
        assert_eq!(fp_width(&path).unwrap(), FpWidth::NotFloat);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_fp_width_ignores_payload() {
        let path = temp_file("probe-truncated");
        let matrix = DenseMatrix::from_vec(vec![1.0_f64; 6], 3, 2).unwrap();
        save_dense(&matrix, &path).unwrap();

        // Drop the whole payload; the header probe must still answer
        let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.set_len(MatHeader::SIZE as u64).unwrap();
        drop(file);

        assert_eq!(fp_width(&path).unwrap(), FpWidth::Fp64);
        assert!(matches!(
            load_dense(&path),
            Err(Error::Format(FormatError::Truncated))
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_truncated_payload() {
        let path = temp_file("truncated");
        let matrix = DenseMatrix::from_vec(vec![7_i64; 8], 4, 2).unwrap();
        save_dense(&matrix, &path).unwrap();

        let full = fs::metadata(&path).unwrap().len();
        let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.set_len(full - 3).unwrap();
        drop(file);

        assert!(matches!(
            load_dense(&path),
            Err(Error::Format(FormatError::Truncated))
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_trailing_data_rejected() {
        let path = temp_file("trailing");
        let matrix = DenseMatrix::from_vec(vec![1_u16; 4], 2, 2).unwrap();
        save_dense(&matrix, &path).unwrap();

        let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(&[0xAB, 0xCD]).unwrap();
        drop(file);

        assert!(matches!(
            load_dense(&path),
            Err(Error::Format(FormatError::SizeMismatch))
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_type_narrowing_mismatch() {
        let path = temp_file("narrow");
        let matrix = DenseMatrix::from_vec(vec![1.5_f32, 2.5], 1, 2).unwrap();
        save_dense_fp64(&matrix, &path).unwrap();

        match load_dense_fp32(&path) {
            Err(Error::Format(FormatError::TypeMismatch { expected, found })) => {
                assert_eq!(expected, DataType::F32);
                assert_eq!(found, DataType::F64);
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }

        // The widened values load exactly through the fp64 path
        let loaded = load_dense_fp64(&path).unwrap();
        assert_eq!(loaded.as_slice(), &[1.5, 2.5]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_dense_fp64_widens_integers() {
        let path = temp_file("widen");
        let matrix = DenseMatrix::from_vec(vec![-3_i32, 0, 250], 3, 1).unwrap();
        save_dense_fp64(&matrix, &path).unwrap();

        assert_eq!(load_dtype(&path).unwrap(), DataType::F64);
        let loaded = load_dense_fp64(&path).unwrap();
        assert_eq!(loaded.as_slice(), &[-3.0, 0.0, 250.0]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_headers() {
        let path = temp_file("corrupt");
        let matrix = DenseMatrix::from_vec(vec![1_u8; 4], 2, 2).unwrap();

        save_dense(&matrix, &path).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        bytes[0] = b'X';
        fs::write(&path, &bytes).unwrap();
        assert!(matches!(
            load_dense(&path),
            Err(Error::Format(FormatError::BadMagic))
        ));

        save_dense(&matrix, &path).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        bytes[4] = MatHeader::VERSION + 1;
        fs::write(&path, &bytes).unwrap();
        assert!(matches!(
            load_dense(&path),
            Err(Error::Format(FormatError::UnsupportedVersion))
        ));

        save_dense(&matrix, &path).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        bytes[5] = 0xFF;
        fs::write(&path, &bytes).unwrap();
        assert!(matches!(
            load_dense(&path),
            Err(Error::Format(FormatError::UnknownDataType))
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_file("does-not-exist");
        let _ = fs::remove_file(&path);
        assert!(matches!(load_dense(&path), Err(Error::Io(_))));
        assert!(matches!(fp_width(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_save_leaves_no_temporary() {
        let path = temp_file("no-tmp");
        let matrix = DenseMatrix::from_vec(vec![9_u64; 6], 2, 3).unwrap();
        save_dense(&matrix, &path).unwrap();

        assert!(!tmp_path(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }
}
