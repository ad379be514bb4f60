mod solution;
