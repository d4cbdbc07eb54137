/*!
# IO utilities

Article records loading, and incremental saving of derived records.
!*/
pub mod reader;
pub mod writer;
