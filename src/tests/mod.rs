mod test_metadata;
