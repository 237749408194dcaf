mod common;

use std::fmt::Write as _;

use hexmem_model::q8;

#[test]
fn mnist_buffer_compiles_to_eight_artifacts() {
    let table = common::mnist_table();
    let buffer = common::ramp_buffer(58_800);
    let image = common::compile_default(&buffer, &table);

    let names: Vec<&str> = image.artifacts.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "conv2d_weights.hex",
            "conv2d_biases.hex",
            "conv2d_1_weights.hex",
            "conv2d_1_biases.hex",
            "dense_weights.hex",
            "dense_biases.hex",
            "dense_1_weights.hex",
            "dense_1_biases.hex",
        ]
    );
}

#[test]
fn per_region_record_counts_sum_as_documented() {
    let table = common::mnist_table();
    let buffer = common::ramp_buffer(58_800);
    let image = common::compile_default(&buffer, &table);

    let expected = [20, 20, 1000, 50, 49_000, 20, 200, 10];
    for (artifact, &records) in image.artifacts.iter().zip(&expected) {
        assert_eq!(artifact.records, records, "records in {}", artifact.file_name);
        assert_eq!(artifact.contents.lines().count(), records);
    }
    let total: usize = image.artifacts.iter().map(|a| a.records).sum();
    assert_eq!(total, 50_320);
}

#[test]
fn first_record_matches_manual_quantization() {
    let table = common::mnist_table();
    let buffer = common::ramp_buffer(58_800);
    let image = common::compile_default(&buffer, &table);

    // Region 0 has stride 25: the first record is the first 25 buffer
    // values quantized in ascending order.
    let mut expected = String::new();
    for &v in &buffer.values()[..25] {
        let _ = write!(expected, "{:04x}", q8::quantize(v));
    }
    expected.push('\n');

    let first_line_len = image.artifacts[0].contents.find('\n').unwrap() + 1;
    assert_eq!(&image.artifacts[0].contents[..first_line_len], expected);
}

#[test]
fn hex_character_totals_are_exact() {
    let table = common::mnist_table();
    let buffer = common::ramp_buffer(58_800);
    let image = common::compile_default(&buffer, &table);

    for (artifact, region) in image.artifacts.iter().zip(table.data_regions()) {
        let stride = region.group_stride as usize;
        let records = (region.length / region.group_stride) as usize;
        // One newline-terminated record per group, 4 hex chars per element.
        assert_eq!(
            artifact.contents.len(),
            records * (stride * 4 + 1),
            "artifact size of {}",
            artifact.file_name
        );
        for line in artifact.contents.lines() {
            assert_eq!(line.len(), stride * 4);
        }
    }
}

#[test]
fn two_runs_are_byte_identical() {
    let table = common::mnist_table();
    let buffer = common::ramp_buffer(58_800);
    let a = common::compile_default(&buffer, &table);
    let b = common::compile_default(&buffer, &table);

    for (x, y) in a.artifacts.iter().zip(&b.artifacts) {
        assert_eq!(x.contents, y.contents, "artifact {}", x.file_name);
    }
}

#[test]
fn compile_then_write_round_trips_through_disk() {
    let table = common::mnist_table();
    let buffer = common::ramp_buffer(58_800);
    let image = common::compile_default(&buffer, &table);

    let dir = std::env::temp_dir().join("hexmem_e2e_write_test");
    let _ = std::fs::remove_dir_all(&dir);

    hexmem_compiler::write_image(&image, &dir).unwrap();
    for artifact in &image.artifacts {
        let on_disk = std::fs::read_to_string(dir.join(&artifact.file_name)).unwrap();
        assert_eq!(on_disk, artifact.contents);
    }

    let _ = std::fs::remove_dir_all(&dir);
}
