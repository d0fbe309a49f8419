//! Step definitions for task edit BDD scenarios.


mod given;
