macro_rules! tmpdir {
    () => {
        tempfile::tempdir().expect("Unable to create tmp directory")
    };
}

macro_rules! tmppath {
    ($dir:expr, $path:expr) => {
        $dir.path().join($path)
    };
}

macro_rules! create_dir {
    ($path:expr) => {{
        std::fs::create_dir_all(&$path).expect("Unable to create dir");
        $path
    }};
}

macro_rules! create_file {
    ($path:expr) => {
        {
            let _file = std::fs::File::create(&$path).expect("Unable to create file");
            $path
        }
    };

    ($path:expr, $($arg:tt)*) => {
        {
            use std::io::Write;

            let mut file = std::fs::File::create(&$path).expect("Unable to create file");
            write!(file, $($arg)*).expect("Unable to write to file");
            $path
        }
    }
}

macro_rules! read_file {
    ($file:expr) => {
        std::fs::read_to_string($file).expect("Unable to read file")
    };
}
