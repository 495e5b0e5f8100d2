// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        ParseInt(::std::num::ParseIntError);
    }

    errors {
        UnknownEnzyme(name: String) {
            description("unknown enzyme")
            display("unknown enzyme {:?}", name)
        }

        InvalidOverhang(value: String) {
            description("invalid overhang type")
            display("invalid overhang type {:?}; expected 5', 3', or blunt", value)
        }

        InvalidRow(row: usize, message: String) {
            description("invalid row in enzyme table")
            display("invalid row {} in enzyme table: {}", row, message)
        }
    }
}
