pub mod venue_param;
